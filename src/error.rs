use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::schemas::ErrorResponse;

/// Errors raised while preparing or serving the frontend bundle
#[derive(Error, Debug)]
pub enum SiteError {
    /// The bundle directory is missing
    #[error("Bundle directory {0} does not exist")]
    MissingDistDir(PathBuf),

    /// The bundle directory has no entry page
    #[error("Bundle directory {0} has no index.html; build the frontend with `trunk build` first")]
    MissingIndex(PathBuf),

    /// Reading a bundle file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A zero request timeout would fail every request
    #[error("Request timeout must be at least one second")]
    InvalidTimeout,
}

impl SiteError {
    /// Stable machine readable code used in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            SiteError::MissingDistDir(_) => "MISSING_DIST_DIR",
            SiteError::MissingIndex(_) => "MISSING_INDEX",
            SiteError::Io { .. } => "IO_ERROR",
            SiteError::InvalidTimeout => "INVALID_TIMEOUT",
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!("Site error: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}
