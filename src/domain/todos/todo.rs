use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch; only set while `completed` is true.
    pub completed_at: Option<i64>,
    pub creator_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Completion state written by a PATCH. `text: None` keeps the stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

impl TodoChanges {
    pub fn new(text: Option<String>, completed: bool, now_ms: i64) -> Self {
        if completed {
            Self {
                text,
                completed: true,
                completed_at: Some(now_ms),
            }
        } else {
            Self {
                text,
                completed: false,
                completed_at: None,
            }
        }
    }

    pub fn apply(&self, todo: &mut Todo) {
        if let Some(text) = &self.text {
            todo.text = text.clone();
        }
        todo.completed = self.completed;
        todo.completed_at = self.completed_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: Uuid::new_v4(),
            text: "walk the dog".into(),
            completed: true,
            completed_at: Some(1_000),
            creator_id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn completing_stamps_time() {
        let changes = TodoChanges::new(None, true, 42);
        assert_eq!(changes.completed_at, Some(42));

        let mut todo = sample();
        todo.completed = false;
        todo.completed_at = None;
        changes.apply(&mut todo);
        assert!(todo.completed);
        assert_eq!(todo.completed_at, Some(42));
        assert_eq!(todo.text, "walk the dog");
    }

    #[test]
    fn uncompleting_clears_time() {
        let changes = TodoChanges::new(Some("feed the cat".into()), false, 42);
        let mut todo = sample();
        changes.apply(&mut todo);
        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);
        assert_eq!(todo.text, "feed the cat");
    }
}
