//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `POST /register` - Account registration (public)
//! - `POST /login`    - Login, returns a bearer token (public)
//! - `GET  /health`   - Health check (public)
//! - `/api/*`         - Listing API; reads are public, mutations require a
//!   Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - JWT bearer verification on mutating routes; the
//!   verified user id is injected into request extensions as
//!   [`crate::api::middleware::Principal`]

use crate::api;
use crate::api::handlers::{health_handler, login_handler, register_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Public and protected routes share the `/api` prefix; only the protected
/// set carries the auth layer, applied per-route so merged method routers
/// on the same path (for example `GET /api/houses` public vs.
/// `POST /api/houses` protected) keep independent middleware stacks.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes().merge(protected);

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
