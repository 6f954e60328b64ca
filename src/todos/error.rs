//! Domain error definitions.
//!
//! The `Display` strings double as the wire-level error messages, so the
//! JSON bodies clients see are defined here and nowhere else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors a todo operation can fail with.
///
/// Both variants are terminal for the single request; the service keeps
/// serving after either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// An id-addressed operation found no matching record.
    #[error("Todo not found")]
    NotFound,

    /// Creation was attempted with a missing or empty title.
    #[error("Title is required")]
    TitleRequired,
}

impl TodoError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::TitleRequired => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
