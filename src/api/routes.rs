use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::request_id;
use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // App lookup only
        .route("/apps/:app_id", get(handlers::get_app))
        // Full analysis pipeline
        .route("/apps/:app_id/analysis", get(handlers::analyze_app))
        .layer(TraceLayer::new_for_http().make_span_with(request_id::make_span))
        .layer(middleware::from_fn(request_id::propagate_request_id))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
