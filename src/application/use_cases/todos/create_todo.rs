use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::application::services::validation;
use crate::domain::todos::todo::Todo;

#[derive(thiserror::Error, Debug)]
pub enum CreateTodoError {
    #[error("todo text is required")]
    EmptyText,
    #[error("failed to store todo")]
    Store(#[source] anyhow::Error),
}

pub struct CreateTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> CreateTodo<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        text: Option<&str>,
    ) -> Result<Todo, CreateTodoError> {
        let text = text
            .and_then(validation::normalize_todo_text)
            .ok_or(CreateTodoError::EmptyText)?;
        self.repo
            .create_for_user(user_id, &text)
            .await
            .map_err(CreateTodoError::Store)
    }
}
