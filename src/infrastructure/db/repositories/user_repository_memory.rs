use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};
use crate::domain::users::user::AuthToken;

struct StoredUser {
    id: Uuid,
    email: String,
    password_hash: String,
    tokens: Vec<AuthToken>,
}

impl StoredUser {
    fn row(&self, with_hash: bool) -> UserRow {
        UserRow {
            id: self.id,
            email: self.email.clone(),
            password_hash: with_hash.then(|| self.password_hash.clone()),
        }
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<StoredUser>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn tokens_of(&self, user_id: Uuid) -> Vec<AuthToken> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.tokens.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(CreateUserError::DuplicateEmail);
        }
        let user = StoredUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            tokens: Vec::new(),
        };
        let row = user.row(true);
        users.push(user);
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).map(|u| u.row(true)))
    }

    async fn find_by_token(&self, token: &str) -> anyhow::Result<Option<UserRow>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.tokens.iter().any(|t| t.matches(token)))
            .map(|u| u.row(false)))
    }

    async fn push_token(&self, user_id: Uuid, token: &AuthToken) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.tokens.push(token.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_token(&self, user_id: Uuid, token: &str) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(false);
        };
        let before = user.tokens.len();
        user.tokens.retain(|t| t.token != token);
        Ok(user.tokens.len() != before)
    }
}
