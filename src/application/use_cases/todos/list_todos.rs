use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::todo::Todo;

pub struct ListTodos<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> ListTodos<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        self.repo.list_for_user(user_id).await
    }
}
