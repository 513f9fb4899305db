use async_trait::async_trait;
use sqlx::Row;
use sqlx::types::Json;
use uuid::Uuid;

use crate::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};
use crate::domain::users::user::AuthToken;
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError> {
        let row = sqlx::query(
            r#"INSERT INTO users (email, password_hash) VALUES ($1, $2)
               RETURNING id, email, password_hash"#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                CreateUserError::DuplicateEmail
            }
            other => CreateUserError::Store(other.into()),
        })?;
        Ok(UserRow {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: row.try_get("password_hash").ok(),
        })
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(r#"SELECT id, email, password_hash FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| UserRow {
            id: r.get("id"),
            email: r.get("email"),
            password_hash: r.try_get("password_hash").ok(),
        }))
    }

    async fn find_by_token(&self, token: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(r#"SELECT id, email FROM users WHERE tokens @> $1"#)
            .bind(Json(vec![AuthToken::auth(token)]))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| UserRow {
            id: r.get("id"),
            email: r.get("email"),
            password_hash: None,
        }))
    }

    async fn push_token(&self, user_id: Uuid, token: &AuthToken) -> anyhow::Result<bool> {
        let res = sqlx::query(r#"UPDATE users SET tokens = tokens || $2 WHERE id = $1"#)
            .bind(user_id)
            .bind(Json(vec![token.clone()]))
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn remove_token(&self, user_id: Uuid, token: &str) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE users SET tokens = COALESCE(
                   (SELECT jsonb_agg(t) FROM jsonb_array_elements(tokens) AS t
                    WHERE t->>'token' <> $2),
                   '[]'::jsonb)
               WHERE id = $1 AND tokens @> jsonb_build_array(jsonb_build_object('token', $2::text))"#,
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}

// Needs a live Postgres: DATABASE_URL=... cargo test -- --ignored
#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at Postgres"]
    async fn token_list_lookup_and_removal(pool: PgPool) {
        let repo = SqlxUserRepository::new(pool.clone());
        let user = repo.create_user("one@example.com", "hash").await.unwrap();
        let other = repo.create_user("two@example.com", "hash").await.unwrap();
        for t in ["t1", "t2", "t3"] {
            assert!(repo.push_token(user.id, &AuthToken::auth(t)).await.unwrap());
        }
        assert!(!repo.push_token(Uuid::new_v4(), &AuthToken::auth("x")).await.unwrap());

        let found = repo.find_by_token("t2").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(found.password_hash.is_none());

        assert!(repo.remove_token(user.id, "t2").await.unwrap());
        assert!(!repo.remove_token(user.id, "t2").await.unwrap());
        assert!(!repo.remove_token(other.id, "t1").await.unwrap());
        assert!(repo.find_by_token("t2").await.unwrap().is_none());
        assert_eq!(repo.find_by_token("t1").await.unwrap().unwrap().id, user.id);

        let stored: Json<Vec<AuthToken>> =
            sqlx::query_scalar("SELECT tokens FROM users WHERE id = $1")
                .bind(user.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored.0, vec![AuthToken::auth("t1"), AuthToken::auth("t3")]);

        // the last token leaves an empty array rather than NULL
        repo.remove_token(user.id, "t1").await.unwrap();
        repo.remove_token(user.id, "t3").await.unwrap();
        let stored: Json<Vec<AuthToken>> =
            sqlx::query_scalar("SELECT tokens FROM users WHERE id = $1")
                .bind(user.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert!(stored.0.is_empty());
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at Postgres"]
    async fn non_auth_entries_do_not_authenticate(pool: PgPool) {
        let repo = SqlxUserRepository::new(pool);
        let user = repo.create_user("one@example.com", "hash").await.unwrap();
        let reset = AuthToken {
            access: "reset".into(),
            token: "t1".into(),
        };
        repo.push_token(user.id, &reset).await.unwrap();
        assert!(repo.find_by_token("t1").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at Postgres"]
    async fn duplicate_email_maps_to_domain_error(pool: PgPool) {
        let repo = SqlxUserRepository::new(pool);
        repo.create_user("one@example.com", "hash").await.unwrap();
        let err = repo
            .create_user("one@example.com", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, CreateUserError::DuplicateEmail));
    }
}
