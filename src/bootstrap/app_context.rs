use std::sync::Arc;

use crate::application::ports::todo_repository::TodoRepository;
use crate::application::ports::token_service::TokenService;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::{Config, DatabaseBackend};
use crate::infrastructure::crypto::JwtTokenService;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::todo_repository_memory::MemoryTodoRepository;
use crate::infrastructure::db::repositories::todo_repository_sqlx::SqlxTodoRepository;
use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    todo_repo: Arc<dyn TodoRepository>,
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
    pool: Option<PgPool>,
}

impl AppServices {
    pub fn new(
        todo_repo: Arc<dyn TodoRepository>,
        user_repo: Arc<dyn UserRepository>,
        token_service: Arc<dyn TokenService>,
        pool: Option<PgPool>,
    ) -> Self {
        Self {
            todo_repo,
            user_repo,
            token_service,
            pool,
        }
    }

    /// Connects (and migrates) the configured backend.
    pub async fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(&cfg.jwt_secret));
        match cfg.database_backend {
            DatabaseBackend::Postgres => {
                let pool = crate::infrastructure::db::connect_pool(
                    &cfg.database_url,
                    cfg.database_max_connections,
                )
                .await?;
                crate::infrastructure::db::migrate(&pool).await?;
                Ok(Self::new(
                    Arc::new(SqlxTodoRepository::new(pool.clone())),
                    Arc::new(SqlxUserRepository::new(pool.clone())),
                    token_service,
                    Some(pool),
                ))
            }
            DatabaseBackend::Memory => {
                tracing::warn!("using in-memory store; data is lost on restart");
                Ok(Self::new(
                    Arc::new(MemoryTodoRepository::new()),
                    Arc::new(MemoryUserRepository::new()),
                    token_service,
                    None,
                ))
            }
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn todo_repo(&self) -> Arc<dyn TodoRepository> {
        self.services.todo_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        self.services.token_service.clone()
    }

    pub fn db_pool(&self) -> Option<PgPool> {
        self.services.pool.clone()
    }
}
