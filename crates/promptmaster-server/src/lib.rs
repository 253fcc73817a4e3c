//! PromptMaster API Server
//!
//! HTTP API and infrastructure adapters for the PromptMaster prompt
//! engineering workbench: the template catalog, the process-prompt
//! pipeline (compose, forward upstream, record), the in-memory history,
//! and the context-document upload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use adapters::InMemoryPromptRepository;
use application::PromptService;

/// Application service with the concrete repository implementation
pub type AppPromptService = PromptService<InMemoryPromptRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub upload_dir: PathBuf,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptMaster API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full application router: API routes, health check, OpenAPI
/// docs, permissive CORS, and the static front end served from
/// `public_dir` at `/`.
pub fn app_router(state: AppState, public_dir: &Path) -> Router {
    let api_routes = Router::new()
        .merge(routes::templates::router())
        .merge(routes::process::router())
        .merge(routes::history::router())
        .merge(routes::upload::router());

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
}
