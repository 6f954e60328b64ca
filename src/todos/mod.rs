//! Todo domain subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract path/body, call the store)
//!     → store.rs (mutate the one in-process collection)
//!     → model.rs (entity and payload shapes on the wire)
//!     → error.rs (NotFound / missing-title mapped to status + JSON body)
//! ```
//!
//! # Design Decisions
//! - The collection is owned by an explicit [`store::TodoStore`] handle,
//!   never module-level state, so tests get isolated instances
//! - Payloads are optional-field structs: field omitted and field present
//!   are distinguishable at the boundary
//! - Insertion order is the observable order; update never reorders

pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

pub use error::TodoError;
pub use model::{CreateTodo, Todo, UpdateTodo};
pub use store::TodoStore;
