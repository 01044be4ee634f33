use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, repository::MetricsRepository};

/// Create the main application router with all API endpoints
pub fn create_router(repo: Arc<dyn MetricsRepository>) -> Router {
    // The dashboard UI is served from a different origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard endpoints
        .route("/api/dashboard/overview", get(handlers::get_overview))
        .route("/api/workload/stats", get(handlers::get_workload_stats))
        .route("/api/workload/details", get(handlers::get_workload_details))
        // Reference data and search
        .route("/api/hospitals", get(handlers::get_hospitals))
        .route("/api/search", get(handlers::search))
        // Add shared state
        .with_state(repo)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
