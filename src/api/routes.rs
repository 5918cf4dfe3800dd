//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/book` - Book CRUD operations
/// - `/health`, `/health/ready`, `/health/live` - Health probes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/book", handlers::books::book_routes())
        .merge(handlers::health::health_routes())
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first,
        // so logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
