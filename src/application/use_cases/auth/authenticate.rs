use crate::application::ports::token_service::TokenService;
use crate::application::ports::user_repository::{UserRepository, UserRow};

/// Resolves an `x-auth` token to the user whose stored list holds it.
pub struct Authenticate<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    pub repo: &'a R,
    pub tokens: &'a T,
}

impl<'a, R, T> Authenticate<'a, R, T>
where
    R: UserRepository + ?Sized,
    T: TokenService + ?Sized,
{
    pub async fn execute(&self, token: &str) -> anyhow::Result<Option<UserRow>> {
        let Some(subject) = self.tokens.subject(token) else {
            return Ok(None);
        };
        let user = self.repo.find_by_token(token).await?;
        Ok(user.filter(|u| u.id == subject))
    }
}
