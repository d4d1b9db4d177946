//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, track_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let body = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public
        .route("/allCourses", get(handlers::course::list_all_courses))
        .merge(student_routes(state))
}

/// Student routes (protected)
fn student_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/student/course/{courseName}",
            post(handlers::course::enroll_course).delete(handlers::course::drop_course),
        )
        .route(
            "/student/enrolledCourses",
            get(handlers::course::get_enrolled_courses),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
