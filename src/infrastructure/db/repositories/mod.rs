pub mod todo_repository_memory;
pub mod todo_repository_sqlx;
pub mod user_repository_memory;
pub mod user_repository_sqlx;
