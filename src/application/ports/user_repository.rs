use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::user::AuthToken;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;
    // Matches an `auth` entry of the stored token list; never returns the hash
    async fn find_by_token(&self, token: &str) -> anyhow::Result<Option<UserRow>>;
    // Returns false when the user does not exist
    async fn push_token(&self, user_id: Uuid, token: &AuthToken) -> anyhow::Result<bool>;
    // Returns false when the token was not in the user's list
    async fn remove_token(&self, user_id: Uuid, token: &str) -> anyhow::Result<bool>;
}
