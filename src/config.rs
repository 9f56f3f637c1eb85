use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use tracing::{debug, info};

use crate::error::SiteError;
use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration of the site host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address the HTTP listener binds to, e.g. `0.0.0.0:8080`
    pub bind_address: String,
    /// Trunk output directory holding `index.html` and the wasm bundle
    pub dist_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    pub fn new(bind_address: impl Into<String>, dist_dir: impl Into<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            bind_address: bind_address.into(),
            dist_dir: dist_dir.into(),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Check that the bundle is in place and the settings are usable.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.request_timeout.is_zero() {
            return Err(SiteError::InvalidTimeout);
        }
        validate_dist_dir(&self.dist_dir)
    }
}

/// The bundle directory must exist and contain `index.html`.
pub fn validate_dist_dir(dist_dir: &Path) -> Result<(), SiteError> {
    if !dist_dir.is_dir() {
        return Err(SiteError::MissingDistDir(dist_dir.to_path_buf()));
    }
    if !dist_dir.join("index.html").is_file() {
        return Err(SiteError::MissingIndex(dist_dir.to_path_buf()));
    }
    Ok(())
}

/// Read the SPA entry page once so unknown paths can be answered from memory.
pub async fn load_index(config: &SiteConfig) -> Result<Bytes, SiteError> {
    let path = config.index_path();
    let contents = tokio::fs::read(&path)
        .await
        .map_err(|source| SiteError::Io { path: path.clone(), source })?;
    debug!("Loaded {} ({} bytes)", path.display(), contents.len());
    Ok(Bytes::from(contents))
}

/// Initialize application state from a validated configuration
pub async fn initialize_app_state(config: SiteConfig) -> Result<AppState, SiteError> {
    config.validate()?;
    info!("Serving frontend bundle from {}", config.dist_dir.display());

    let index_html = load_index(&config).await?;

    Ok(AppState {
        config: Arc::new(config),
        index_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::write_test_bundle;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.dist_dir, PathBuf::from("workspace/frontend/dist"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dist");
        let config = SiteConfig::new("127.0.0.1:0", &missing, 30);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SiteError::MissingDistDir(ref path) if path == &missing));
        assert_eq!(err.code(), "MISSING_DIST_DIR");
    }

    #[test]
    fn test_missing_index_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::new("127.0.0.1:0", dir.path(), 30);
        assert!(matches!(config.validate(), Err(SiteError::MissingIndex(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = write_test_bundle();
        let config = SiteConfig::new("127.0.0.1:0", dir.path(), 0);
        assert!(matches!(config.validate(), Err(SiteError::InvalidTimeout)));
    }

    #[tokio::test]
    async fn test_initialize_loads_index() {
        let dir = write_test_bundle();
        let state = initialize_app_state(SiteConfig::new("127.0.0.1:0", dir.path(), 5))
            .await
            .unwrap();
        let index = std::fs::read(dir.path().join("index.html")).unwrap();
        assert_eq!(state.index_html.as_ref(), index.as_slice());
        assert_eq!(state.config.request_timeout, Duration::from_secs(5));
    }
}
