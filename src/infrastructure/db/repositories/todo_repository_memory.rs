use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::todo::{Todo, TodoChanges};

#[derive(Default)]
pub struct MemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn create_for_user(&self, creator_id: Uuid, text: &str) -> anyhow::Result<Todo> {
        let todo = Todo {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
            completed_at: None,
            creator_id,
            created_at: chrono::Utc::now(),
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn list_for_user(&self, creator_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .filter(|t| t.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn get_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .find(|t| t.id == id && t.creator_id == creator_id)
            .cloned())
    }

    async fn delete_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let mut todos = self.todos.write().await;
        let pos = todos
            .iter()
            .position(|t| t.id == id && t.creator_id == creator_id);
        Ok(pos.map(|i| todos.remove(i)))
    }

    async fn update_owned(
        &self,
        id: Uuid,
        creator_id: Uuid,
        changes: &TodoChanges,
    ) -> anyhow::Result<Option<Todo>> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos
            .iter_mut()
            .find(|t| t.id == id && t.creator_id == creator_id)
        else {
            return Ok(None);
        };
        changes.apply(todo);
        Ok(Some(todo.clone()))
    }
}
