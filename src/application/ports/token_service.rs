use uuid::Uuid;

use crate::domain::users::user::AuthToken;

pub trait TokenService: Send + Sync {
    /// Mints a fresh token for `user_id`. Two calls never return the same token.
    fn issue(&self, user_id: Uuid) -> anyhow::Result<AuthToken>;

    /// Decodes the subject of a token this service issued. A `Some` result
    /// does not mean the token is still active; the stored list decides that.
    fn subject(&self, token: &str) -> Option<Uuid>;
}
