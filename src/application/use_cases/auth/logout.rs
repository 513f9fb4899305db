use uuid::Uuid;

use crate::application::ports::user_repository::UserRepository;

pub struct Logout<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> Logout<'a, R> {
    /// Drops exactly `token` from the user's list; other tokens stay valid.
    pub async fn execute(&self, user_id: Uuid, token: &str) -> anyhow::Result<bool> {
        self.repo.remove_token(user_id, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::users::user::AuthToken;
    use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;

    #[tokio::test]
    async fn leaves_other_tokens_intact() {
        let repo = MemoryUserRepository::new();
        let user = repo.create_user("a@example.com", "hash").await.unwrap();
        for t in ["one", "two", "three"] {
            repo.push_token(user.id, &AuthToken::auth(t)).await.unwrap();
        }
        let uc = Logout { repo: &repo };
        assert!(uc.execute(user.id, "two").await.unwrap());
        assert_eq!(
            repo.tokens_of(user.id).await,
            vec![AuthToken::auth("one"), AuthToken::auth("three")]
        );
    }
}
