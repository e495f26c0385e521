//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// The authenticated user id for the current request.
///
/// Inserted into request extensions by [`layer`]; protected handlers read
/// it with `Extension<Principal>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal(pub i64);

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header
/// 2. Verify the JWT signature and expiry
/// 3. Insert the [`Principal`] into request extensions
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` before any handler logic runs if:
/// - The Authorization header is missing
/// - The token format is invalid
/// - The signature does not verify or the token has expired
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user_id = st.auth_service.verify_token(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(Principal(user_id));

    Ok(next.run(req).await)
}
