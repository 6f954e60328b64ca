//! In-Memory Todo HTTP Service Library

pub mod config;
pub mod http;
pub mod todos;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use todos::store::TodoStore;
