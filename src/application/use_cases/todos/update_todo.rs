use uuid::Uuid;

use crate::application::ports::todo_repository::TodoRepository;
use crate::application::services::validation;
use crate::domain::todos::todo::{Todo, TodoChanges};

#[derive(thiserror::Error, Debug)]
pub enum UpdateTodoError {
    #[error("todo text cannot be empty")]
    EmptyText,
    #[error("failed to update todo")]
    Store(#[source] anyhow::Error),
}

pub struct UpdateTodo<'a, R: TodoRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTodoRequest {
    pub text: Option<String>,
    pub completed: bool,
}

impl<'a, R: TodoRepository + ?Sized> UpdateTodo<'a, R> {
    // Ok(None) => not found or owned by someone else
    pub async fn execute(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: &UpdateTodoRequest,
    ) -> Result<Option<Todo>, UpdateTodoError> {
        let text = match req.text.as_deref().map(validation::normalize_todo_text) {
            Some(Some(text)) => Some(text),
            Some(None) => {
                // Missing and foreign todos stay 404 even with bad input
                let owned = self
                    .repo
                    .get_owned(id, user_id)
                    .await
                    .map_err(UpdateTodoError::Store)?;
                return match owned {
                    Some(_) => Err(UpdateTodoError::EmptyText),
                    None => Ok(None),
                };
            }
            None => None,
        };
        let now_ms = chrono::Utc::now().timestamp_millis();
        let changes = TodoChanges::new(text, req.completed, now_ms);
        self.repo
            .update_owned(id, user_id, &changes)
            .await
            .map_err(UpdateTodoError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::repositories::todo_repository_memory::MemoryTodoRepository;

    #[tokio::test]
    async fn completion_round_trip() {
        let repo = MemoryTodoRepository::new();
        let user = Uuid::new_v4();
        let todo = repo.create_for_user(user, "second").await.unwrap();
        let uc = UpdateTodo { repo: &repo };

        let done = uc
            .execute(
                todo.id,
                user,
                &UpdateTodoRequest {
                    text: Some("updated".into()),
                    completed: true,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(done.text, "updated");
        assert!(done.completed);
        assert!(done.completed_at.is_some_and(|t| t > 0));

        let undone = uc
            .execute(todo.id, user, &UpdateTodoRequest::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(undone.text, "updated");
        assert!(!undone.completed);
        assert_eq!(undone.completed_at, None);
    }

    #[tokio::test]
    async fn other_users_cannot_update() {
        let repo = MemoryTodoRepository::new();
        let owner = Uuid::new_v4();
        let todo = repo.create_for_user(owner, "mine").await.unwrap();
        let out = UpdateTodo { repo: &repo }
            .execute(
                todo.id,
                Uuid::new_v4(),
                &UpdateTodoRequest {
                    text: Some("hijacked".into()),
                    completed: true,
                },
            )
            .await
            .unwrap();
        assert!(out.is_none());
        let stored = repo.get_owned(todo.id, owner).await.unwrap().unwrap();
        assert_eq!(stored.text, "mine");
        assert!(!stored.completed);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let repo = MemoryTodoRepository::new();
        let user = Uuid::new_v4();
        let todo = repo.create_for_user(user, "keep").await.unwrap();
        let out = UpdateTodo { repo: &repo }
            .execute(
                todo.id,
                user,
                &UpdateTodoRequest {
                    text: Some("  ".into()),
                    completed: false,
                },
            )
            .await;
        assert!(matches!(out, Err(UpdateTodoError::EmptyText)));
    }

    #[tokio::test]
    async fn blank_text_on_foreign_todo_is_not_found() {
        let repo = MemoryTodoRepository::new();
        let owner = Uuid::new_v4();
        let todo = repo.create_for_user(owner, "keep").await.unwrap();
        let uc = UpdateTodo { repo: &repo };
        let blank = UpdateTodoRequest {
            text: Some(String::new()),
            completed: true,
        };

        let foreign = uc.execute(todo.id, Uuid::new_v4(), &blank).await.unwrap();
        assert!(foreign.is_none());
        let missing = uc.execute(Uuid::new_v4(), owner, &blank).await.unwrap();
        assert!(missing.is_none());

        let stored = repo.get_owned(todo.id, owner).await.unwrap().unwrap();
        assert_eq!(stored.text, "keep");
        assert!(!stored.completed);
    }
}
