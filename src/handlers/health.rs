use axum::{extract::State, response::Json};
use common::site::PAGES;
use tracing::instrument;

use crate::config::validate_dist_dir;
use crate::error::SiteError;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Frontend bundle is missing", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, SiteError> {
    // The bundle can disappear under a running server when it gets rebuilt
    validate_dist_dir(&state.config.dist_dir)?;

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        pages: PAGES.to_vec(),
    };

    Ok(Json(response))
}
