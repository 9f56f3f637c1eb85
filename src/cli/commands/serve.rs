use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, SiteConfig};
use crate::router::{create_router, with_metrics};

pub async fn serve(config: SiteConfig, metrics: bool) -> Result<()> {
    trace!("Entering serve function");
    info!("REIV IP Signals site host starting up");
    debug!("Bundle directory: {}", config.dist_dir.display());
    debug!("Bind address: {}", config.bind_address);
    debug!("Request timeout: {:?}", config.request_timeout);

    let bind_address = config.bind_address.clone();

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(config).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e.into());
        }
    };

    // Create router
    trace!("Creating application router");
    let mut app = create_router(state);
    if metrics {
        app = with_metrics(app);
        debug!("Prometheus metrics enabled");
    }
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Site running on http://{}", bind_address);
    info!("Dashboard available at http://{}/dashboard", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    if metrics {
        info!("Metrics available at http://{}/metrics", bind_address);
    }
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
