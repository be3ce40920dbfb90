use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A todo item as stored by the todo service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: i64,

    /// Short title shown in the list.
    pub title: String,

    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the item has been completed.
    pub completed: bool,

    /// Owner of the item.
    pub user_id: i64,

    /// When the item was created.
    pub created_at: Timestamp,
}

impl Todo {
    /// Description text worth rendering, if any.
    #[must_use]
    pub fn visible_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /todos/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

/// Unsaved input of the "Add New Todo" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

impl TodoDraft {
    /// Whether the draft may be submitted; whitespace-only titles may not.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The request body for this draft, or `None` when it is not submittable.
    #[must_use]
    pub fn to_request(&self) -> Option<CreateTodoRequest> {
        self.is_submittable().then(|| CreateTodoRequest {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }
}
