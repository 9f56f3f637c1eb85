#[cfg(test)]
pub mod test_utils {
    use crate::config::{initialize_app_state, SiteConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_INDEX_HTML: &str =
        "<!DOCTYPE html><html><head><title>REIV IP Signals</title></head><body></body></html>";
    pub const TEST_SCRIPT: &str = "console.log('reiv');";

    /// Write a minimal Trunk-like bundle into a fresh temporary directory.
    ///
    /// The directory is removed when the returned guard is dropped.
    pub fn write_test_bundle() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), TEST_INDEX_HTML).expect("Failed to write index.html");
        std::fs::create_dir(dir.path().join("assets")).expect("Failed to create assets dir");
        std::fs::write(dir.path().join("assets").join("app.js"), TEST_SCRIPT).expect("Failed to write app.js");
        dir
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> (AppState, TempDir) {
        let dir = write_test_bundle();
        let config = SiteConfig::new("127.0.0.1:0", dir.path(), 30);
        let state = initialize_app_state(config)
            .await
            .expect("Failed to initialize test state");
        (state, dir)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing. Keep the directory alive for the test's duration.
    pub async fn setup_test_app() -> (Router, TempDir) {
        let _guard = init_test_tracing();

        let (state, dir) = setup_test_app_state().await;
        (create_router(state), dir)
    }
}
