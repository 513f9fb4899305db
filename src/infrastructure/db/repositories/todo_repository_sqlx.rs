use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::todo::{Todo, TodoChanges};
use crate::infrastructure::db::PgPool;

const TODO_COLUMNS: &str = "id, text, completed, completed_at, creator_id, created_at";

pub struct SqlxTodoRepository {
    pub pool: PgPool,
}

impl SqlxTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_todo(r: PgRow) -> Todo {
    Todo {
        id: r.get("id"),
        text: r.get("text"),
        completed: r.get("completed"),
        completed_at: r.get("completed_at"),
        creator_id: r.get("creator_id"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl TodoRepository for SqlxTodoRepository {
    async fn create_for_user(&self, creator_id: Uuid, text: &str) -> anyhow::Result<Todo> {
        let sql = format!(
            "INSERT INTO todos (text, creator_id) VALUES ($1, $2) RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(text)
            .bind(creator_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(map_todo(row))
    }

    async fn list_for_user(&self, creator_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        let sql = format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE creator_id = $1 ORDER BY created_at, id"
        );
        let rows = sqlx::query(&sql)
            .bind(creator_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_todo).collect())
    }

    async fn get_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND creator_id = $2");
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(creator_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_todo))
    }

    async fn delete_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let sql = format!(
            "DELETE FROM todos WHERE id = $1 AND creator_id = $2 RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(creator_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_todo))
    }

    async fn update_owned(
        &self,
        id: Uuid,
        creator_id: Uuid,
        changes: &TodoChanges,
    ) -> anyhow::Result<Option<Todo>> {
        let sql = format!(
            "UPDATE todos SET text = COALESCE($3, text), completed = $4, completed_at = $5
             WHERE id = $1 AND creator_id = $2 RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(creator_id)
            .bind(changes.text.as_deref())
            .bind(changes.completed)
            .bind(changes.completed_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_todo))
    }
}
