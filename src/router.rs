use crate::handlers::{health::health_check, site::spa_fallback};
use crate::schemas::{ApiDoc, AppState};
use axum::{handler::Handler, routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
///
/// Bundle files are served from the configured directory; any other path gets
/// the SPA entry page with a status from the page table.
pub fn create_router(state: AppState) -> Router {
    let fallback = spa_fallback.with_state(state.clone());
    let bundle = ServeDir::new(&state.config.dist_dir).fallback(fallback);
    let timeout = state.config.request_timeout;

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Static bundle with SPA fallback
        .fallback_service(bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Wrap the router with request metrics and expose them at `/metrics`.
///
/// Installs the global Prometheus recorder, so it can only run once per process.
pub fn with_metrics(router: Router) -> Router {
    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    router
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(metric_layer)
}
