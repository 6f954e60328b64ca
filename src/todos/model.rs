//! Todo entity and request payload types.

use serde::{Deserialize, Serialize};

/// The sole entity managed by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,

    /// Task title. Non-empty at creation time.
    pub title: String,

    /// Completion flag, `false` at creation.
    pub completed: bool,
}

/// Body of `POST /todos`.
///
/// `title` is optional so that a missing field is distinguishable from a
/// present-but-empty one; both are rejected, with the same error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

/// Body of `PUT /todos/{id}`. Omitted fields leave the stored value as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
