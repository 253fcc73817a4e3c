//! Upload Route - Context Document Storage
//!
//! The file's bytes are written to disk but never parsed; clients use the
//! original name as a placeholder context string for later prompts.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use promptmaster::domain::UploadAcknowledgement;

use crate::models::ErrorMessage;
use crate::AppState;

/// Upload a context document
#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 200, description = "File stored", body = UploadAcknowledgement),
        (status = 400, description = "No file uploaded", body = ErrorMessage),
        (status = 500, description = "Failed to store file", body = ErrorMessage)
    ),
    tag = "Upload"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAcknowledgement>, (StatusCode, Json<ErrorMessage>)> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                error: err.to_string(),
            }),
        )
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await.map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorMessage {
                    error: err.to_string(),
                }),
            )
        })?;

        // Disambiguated on disk by a millisecond prefix, like the
        // record ids.
        let filename = format!("{}-{}", Utc::now().timestamp_millis(), original_name);
        let path = state.upload_dir.join(&filename);

        tokio::fs::write(&path, &data).await.map_err(|err| {
            tracing::error!("Failed to store upload {}: {}", path.display(), err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage {
                    error: "Failed to store uploaded file".to_string(),
                }),
            )
        })?;

        tracing::info!("Stored upload {} ({} bytes)", path.display(), data.len());

        return Ok(Json(UploadAcknowledgement {
            success: true,
            filename,
            original_name,
            path: path.display().to_string(),
        }));
    }

    Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorMessage {
            error: "No file uploaded".to_string(),
        }),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/upload", post(upload_file))
}
