//! API route configuration under the `/api` prefix.

use crate::api::handlers::{
    house_create_handler, house_delete_handler, house_get_handler, house_list_handler,
    house_update_handler, houses_by_landlord_handler, houses_by_state_handler, tenant_add_handler,
    user_get_handler, user_list_handler, user_update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Unauthenticated browse endpoints.
///
/// # Endpoints
///
/// - `GET /houses`                - List all houses
/// - `GET /houses/{id}`           - House by id
/// - `GET /houses/state/{state}`  - Houses in a state
/// - `GET /houses/landlord/{id}`  - Houses owned by a landlord
/// - `GET /users`                 - List all users
/// - `GET /users/{id}`            - User by id
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/houses", get(house_list_handler))
        .route("/houses/{id}", get(house_get_handler))
        .route("/houses/state/{state}", get(houses_by_state_handler))
        .route("/houses/landlord/{id}", get(houses_by_landlord_handler))
        .route("/users", get(user_list_handler))
        .route("/users/{id}", get(user_get_handler))
}

/// Mutating endpoints, protected by Bearer token authentication via
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST   /houses`        - Create a listing
/// - `POST   /houses/tenant` - Book a tenant into a house
/// - `PUT    /houses/{id}`   - Update an owned listing
/// - `DELETE /houses/{id}`   - Delete an owned listing
/// - `PUT    /users/{id}`    - Update own profile
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/houses", post(house_create_handler))
        .route("/houses/tenant", post(tenant_add_handler))
        .route(
            "/houses/{id}",
            put(house_update_handler).delete(house_delete_handler),
        )
        .route("/users/{id}", put(user_update_handler))
}
