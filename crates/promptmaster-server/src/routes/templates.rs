//! Template Routes - Strategy Catalog

use axum::{routing::get, Json, Router};

use promptmaster::domain::Template;

use crate::AppState;

/// List the built-in prompting strategy templates
#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Template catalog", body = Vec<Template>)
    ),
    tag = "Templates"
)]
pub async fn list_templates() -> Json<Vec<Template>> {
    Json(Template::catalog())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/templates", get(list_templates))
}
