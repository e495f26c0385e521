//! Handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::application::services::RegisterData;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new landlord account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 400 if a field is missing, the email is malformed, or the email
/// is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    let user = state
        .auth_service
        .register(RegisterData {
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            password: payload.password,
            phone_number: payload.phone_number,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "success".to_string(),
            message: "Registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Authenticates a user and returns a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// Returns 400 for missing fields or an unknown email, 403 for a wrong
/// password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        status: "success".to_string(),
        message: "logged in".to_string(),
        token,
    }))
}
