use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::token_service::TokenService;
use crate::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};
use crate::application::services::validation;

#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least {} characters", validation::MIN_PASSWORD_LEN)]
    WeakPassword,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("failed to register user")]
    Internal(#[source] anyhow::Error),
}

pub struct Register<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    pub repo: &'a R,
    pub tokens: &'a T,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// A user together with the token just issued to them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserRow,
    pub token: String,
}

impl<'a, R, T> Register<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    pub async fn execute(
        &self,
        req: &RegisterRequest,
    ) -> Result<AuthenticatedUser, RegisterError> {
        let email = validation::normalize_email(&req.email).ok_or(RegisterError::InvalidEmail)?;
        if !validation::password_is_acceptable(&req.password) {
            return Err(RegisterError::WeakPassword);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| RegisterError::Internal(anyhow::anyhow!(e.to_string())))?
            .to_string();
        let user = self
            .repo
            .create_user(&email, &hash)
            .await
            .map_err(|e| match e {
                CreateUserError::DuplicateEmail => RegisterError::DuplicateEmail,
                CreateUserError::Store(err) => RegisterError::Internal(err),
            })?;
        let token = self.tokens.issue(user.id).map_err(RegisterError::Internal)?;
        self.repo
            .push_token(user.id, &token)
            .await
            .map_err(RegisterError::Internal)?;
        Ok(AuthenticatedUser {
            user: UserRow {
                password_hash: None,
                ..user
            },
            token: token.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::JwtTokenService;
    use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn stores_hash_and_first_token() {
        let repo = MemoryUserRepository::new();
        let tokens = JwtTokenService::new("secret");
        let uc = Register {
            repo: &repo,
            tokens: &tokens,
        };
        let out = uc.execute(&request(" new@example.com ", "hunter22")).await.unwrap();
        assert_eq!(out.user.email, "new@example.com");
        assert!(out.user.password_hash.is_none());

        let stored = repo.find_by_email("new@example.com").await.unwrap().unwrap();
        let hash = stored.password_hash.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("hunter22"));

        let list = repo.tokens_of(out.user.id).await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].token, out.token);
    }

    #[tokio::test]
    async fn rejects_bad_input_and_duplicates() {
        let repo = MemoryUserRepository::new();
        let tokens = JwtTokenService::new("secret");
        let uc = Register {
            repo: &repo,
            tokens: &tokens,
        };
        assert!(matches!(
            uc.execute(&request("nope", "hunter22")).await,
            Err(RegisterError::InvalidEmail)
        ));
        assert!(matches!(
            uc.execute(&request("a@example.com", "123")).await,
            Err(RegisterError::WeakPassword)
        ));
        uc.execute(&request("a@example.com", "hunter22")).await.unwrap();
        assert!(matches!(
            uc.execute(&request("a@example.com", "different1")).await,
            Err(RegisterError::DuplicateEmail)
        ));
    }
}
