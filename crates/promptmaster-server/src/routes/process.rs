//! Process-Prompt Route - Compose, Forward Upstream, Record

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::application::{ProcessError, ProcessPromptInput};
use crate::models::{ProcessErrorResponse, ProcessPromptRequest, ProcessPromptResponse};
use crate::AppState;

/// Fixed failure message, matching the original service's envelope.
const GATEWAY_FAILURE_MESSAGE: &str = "Failed to get response from Gemini AI";

/// Process a prompt through the selected strategy and the upstream model
#[utoipa::path(
    post,
    path = "/api/process-prompt",
    request_body = ProcessPromptRequest,
    responses(
        (status = 200, description = "Prompt processed", body = ProcessPromptResponse),
        (status = 500, description = "Upstream failure", body = ProcessErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn process_prompt(
    State(state): State<AppState>,
    Json(payload): Json<ProcessPromptRequest>,
) -> Result<Json<ProcessPromptResponse>, (StatusCode, Json<ProcessErrorResponse>)> {
    let input = ProcessPromptInput {
        prompt: payload.prompt,
        prompt_type: payload.prompt_type,
        format: payload.format,
        examples: payload.examples,
        role: payload.role,
        context: payload.context,
    };

    match state.prompt_service.process(input).await {
        Ok(record) => Ok(Json(ProcessPromptResponse {
            success: true,
            response: record.response,
            prompt_id: record.id,
        })),
        Err(err) => {
            let message = match err {
                ProcessError::Gateway(gateway) => {
                    tracing::error!("Gemini API error: {}", gateway);
                    GATEWAY_FAILURE_MESSAGE.to_string()
                }
                ProcessError::Domain(domain) => domain.to_string(),
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProcessErrorResponse {
                    success: false,
                    error: message,
                }),
            ))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/process-prompt", post(process_prompt))
}
