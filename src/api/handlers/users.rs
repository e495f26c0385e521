//! Handlers for user endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::user::{UpdateUserRequest, UserDto, UserResponse};
use crate::api::middleware::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all registered users.
///
/// # Endpoint
///
/// `GET /api/users` (public)
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Retrieves a user by id.
///
/// # Endpoint
///
/// `GET /api/users/{id}` (public)
pub async fn user_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Updates the authenticated user's own profile.
///
/// # Endpoint
///
/// `PUT /api/users/{id}` (authenticated)
///
/// # Errors
///
/// Returns 401 if the principal differs from the target id.
pub async fn user_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(Principal(principal)): Extension<Principal>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    let user = state
        .user_service
        .update_user(principal, id, payload.into_patch())
        .await?;

    Ok(Json(UserResponse {
        status: "success".to_string(),
        message: "User updated successfully".to_string(),
        user: user.into(),
    }))
}
