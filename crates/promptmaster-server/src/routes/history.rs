//! Prompt History Routes
//!
//! HTTP handlers that delegate to PromptService for history access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptmaster::domain::{DomainError, PromptRecord};

use crate::models::ErrorMessage;
use crate::AppState;

/// List all recorded prompts, most recent first
#[utoipa::path(
    get,
    path = "/api/prompts",
    responses(
        (status = 200, description = "Prompt history, most recent first", body = Vec<PromptRecord>),
        (status = 500, description = "Internal server error", body = ErrorMessage)
    ),
    tag = "Prompts"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptRecord>>, (StatusCode, Json<ErrorMessage>)> {
    let records = state.prompt_service.history().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(records))
}

/// Look up a recorded prompt by id
#[utoipa::path(
    get,
    path = "/api/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt record id")
    ),
    responses(
        (status = 200, description = "Prompt record", body = PromptRecord),
        (status = 404, description = "Prompt not found", body = ErrorMessage)
    ),
    tag = "Prompts"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptRecord>, (StatusCode, Json<ErrorMessage>)> {
    match state.prompt_service.get(&id).await {
        Ok(record) => Ok(Json(record)),
        Err(DomainError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorMessage {
                error: "Prompt not found".to_string(),
            }),
        )),
        Err(other) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage {
                error: other.to_string(),
            }),
        )),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prompts", get(list_prompts))
        .route("/api/prompts/:id", get(get_prompt))
}
