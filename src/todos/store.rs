//! The in-process todo collection.
//!
//! # Responsibilities
//! - Own the one ordered collection of todos
//! - Generate ids (UUID v4) at creation
//! - Serialize mutations so readers never see a partial write
//!
//! # Design Decisions
//! - `Vec` keeps insertion order observable through list()
//! - std Mutex, not an async lock: no await happens under the guard
//! - Every operation is one synchronous step; no retries

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::todos::error::TodoError;
use crate::todos::model::{Todo, UpdateTodo};

/// Cloneable handle to the shared todo collection.
///
/// Clones share the same underlying collection; separate `new()` calls
/// produce fully isolated stores.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned mutex only means another thread panicked mid-request;
    // the Vec itself is never left half-mutated, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, Vec<Todo>> {
        self.todos.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All todos, in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.lock().clone()
    }

    /// Look up one todo by id.
    pub fn get(&self, id: &str) -> Result<Todo, TodoError> {
        self.lock()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TodoError::NotFound)
    }

    /// Create a todo and append it to the collection.
    ///
    /// A missing or empty title is rejected before any id is generated.
    pub fn create(&self, title: Option<String>) -> Result<Todo, TodoError> {
        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => return Err(TodoError::TitleRequired),
        };

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
        };

        self.lock().push(todo.clone());

        tracing::debug!(id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Overwrite provided fields on an existing todo, in place.
    ///
    /// The id and the todo's position in the collection never change.
    /// Note the title is deliberately not re-checked for emptiness here;
    /// only creation enforces that (matches the original contract).
    pub fn update(&self, id: &str, update: UpdateTodo) -> Result<Todo, TodoError> {
        let mut todos = self.lock();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound)?;

        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(completed) = update.completed {
            todo.completed = completed;
        }

        tracing::debug!(id = %todo.id, "Todo updated");
        Ok(todo.clone())
    }

    /// Remove a todo, returning its prior value.
    pub fn delete(&self, id: &str) -> Result<Todo, TodoError> {
        let mut todos = self.lock();
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound)?;

        let removed = todos.remove(index);
        tracing::debug!(id = %removed.id, "Todo deleted");
        Ok(removed)
    }
}
