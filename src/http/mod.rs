//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → todos::handlers (extract, dispatch to the store)
//!     → JSON response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
