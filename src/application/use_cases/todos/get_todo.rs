use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::domain::todos::todo::Todo;

pub struct GetTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TodoRepository + ?Sized> GetTodo<'a, R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Todo>> {
        self.repo.get_owned(id, user_id).await
    }
}
