use serde::{Deserialize, Serialize};

/// One entry of a to-do list.
///
/// Serializes as `{"id": "...", "text": "...", "completed": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique within its list.
    pub id: String,
    /// Text as entered.
    pub text: String,
    /// Whether the item is done.
    pub completed: bool,
}

impl TodoItem {
    /// A new, incomplete item with a fresh random id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }

    /// An item with a caller-chosen id, used for seed data.
    pub fn with_id(id: impl Into<String>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }
}
