//! Task model definitions

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single todo entry
///
/// The serialized shape is the persisted wire form:
/// `{id, text, completed, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the list, assigned from the store counter, never reused
    pub id: u64,
    /// Trimmed, non-empty entry text; immutable once created
    pub text: String,
    /// Completion flag, flipped only by an explicit toggle intent
    pub completed: bool,
    /// Creation time in Unix milliseconds, used only for display
    pub created_at: i64,
}

impl Task {
    /// Create a new active task with the given id and (already trimmed) text
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new(1, "buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert!(task.created_at > 0);
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let task = Task {
            id: 7,
            text: "write report".to_string(),
            completed: true,
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "text": "write report",
                "completed": true,
                "createdAt": 1_700_000_000_000_i64
            })
        );
    }

    #[test]
    fn test_deserialize_wire_form() {
        let task: Task = serde_json::from_str(
            r#"{"id":2,"text":"call dentist","completed":false,"createdAt":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(task.id, 2);
        assert_eq!(task.text, "call dentist");
        assert!(!task.completed);
        assert_eq!(task.created_at, 1_700_000_000_000);
    }
}
