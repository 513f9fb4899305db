use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::todos::todo::{Todo, TodoChanges};

/// Every lookup is scoped to the creator: a todo owned by someone else
/// behaves exactly like a missing one.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create_for_user(&self, creator_id: Uuid, text: &str) -> anyhow::Result<Todo>;

    async fn list_for_user(&self, creator_id: Uuid) -> anyhow::Result<Vec<Todo>>;

    async fn get_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>>;

    // Returns the removed todo, None if not found/unauthorized
    async fn delete_owned(&self, id: Uuid, creator_id: Uuid) -> anyhow::Result<Option<Todo>>;

    // Returns the todo after the update, None if not found/unauthorized
    async fn update_owned(
        &self,
        id: Uuid,
        creator_id: Uuid,
        changes: &TodoChanges,
    ) -> anyhow::Result<Option<Todo>>;
}
