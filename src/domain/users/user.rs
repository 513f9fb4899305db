use serde::{Deserialize, Serialize};

/// The only access level tokens are issued for.
pub const AUTH_ACCESS: &str = "auth";

/// One entry of a user's stored token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access: String,
    pub token: String,
}

impl AuthToken {
    pub fn auth(token: impl Into<String>) -> Self {
        Self {
            access: AUTH_ACCESS.to_string(),
            token: token.into(),
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        self.access == AUTH_ACCESS && self.token == token
    }
}
