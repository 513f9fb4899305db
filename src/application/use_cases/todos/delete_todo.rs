use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::todo::Todo;

pub struct DeleteTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> DeleteTodo<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let removed = self.repo.delete_owned(id, user_id).await?;
        if let Some(todo) = &removed {
            tracing::debug!(todo_id = %todo.id, user_id = %user_id, "todo_deleted");
        }
        Ok(removed)
    }
}
