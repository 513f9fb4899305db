use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::token_service::TokenService;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::application::use_cases::auth::register::AuthenticatedUser;

pub struct Login<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    pub repo: &'a R,
    pub tokens: &'a T,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R, T> Login<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    /// None when the email is unknown or the password does not match.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<AuthenticatedUser>> {
        let row = match self.repo.find_by_email(req.email.trim()).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let hash = row.password_hash.clone().unwrap_or_default();
        let parsed = PasswordHash::new(&hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_err()
        {
            return Ok(None);
        }
        let token = self.tokens.issue(row.id)?;
        if !self.repo.push_token(row.id, &token).await? {
            return Ok(None);
        }
        Ok(Some(AuthenticatedUser {
            user: UserRow {
                id: row.id,
                email: row.email,
                password_hash: None,
            },
            token: token.token,
        }))
    }
}
