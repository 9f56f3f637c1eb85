use std::sync::Arc;

use axum::body::Bytes;
use common::site::SitePage;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::config::SiteConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    /// Contents of `index.html`, handed out for every path without a file
    pub index_html: Bytes,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Pages the frontend routes to; every other path is answered with 404
    pub pages: Vec<SitePage>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::health::health_check),
    components(schemas(ErrorResponse, HealthResponse, SitePage)),
    tags((name = "health", description = "Health check endpoints")),
    info(
        title = "REIV IP Signals",
        description = "Static host for the REIV IP Signals landing page and REIVIP-COP demo dashboard",
        version = "0.1.0",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
