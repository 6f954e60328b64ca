//! HTTP handlers for the todo operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;
use crate::todos::error::TodoError;
use crate::todos::model::{CreateTodo, Todo, UpdateTodo};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list())
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.store.get(&id)?;
    Ok(Json(todo))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = state.store.create(body.title).inspect_err(|_| {
        tracing::warn!("Rejected todo creation with missing or empty title");
    })?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodo>,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.store.update(&id, body)?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.store.delete(&id)?;
    Ok(Json(todo))
}
