//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short link (other methods: 405)
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `GET  /`            - Static landing page
//! - `GET  /static/*`    - Static assets
//!
//! # Middleware
//!
//! - **Security headers** - fixed header set on every response
//! - **Tracing** - structured request/response logging

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by the server wrapper (see
/// [`crate::server::run`]) so `/{code}/` resolves like `/{code}`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .route_service("/", ServeFile::new("static/index.html"))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(middleware::from_fn(security_headers::layer))
        .layer(tracing::layer())
}
