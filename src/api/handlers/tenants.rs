//! Handler for tenant booking.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::tenant::{AddTenantRequest, TenantResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Books a tenant into a house with at least one available room.
///
/// # Endpoint
///
/// `POST /api/houses/tenant` (authenticated)
///
/// The room decrement and tenant insert happen in one transaction, so two
/// concurrent bookings of the last room cannot both succeed.
///
/// # Errors
///
/// Returns 400 on validation failure, 404 for an unknown house, and 409
/// when the house has no available rooms.
pub async fn tenant_add_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddTenantRequest>,
) -> Result<(StatusCode, Json<TenantResponse>), AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    let tenant = state
        .tenant_service
        .add_tenant(payload.into_new_tenant())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TenantResponse {
            status: "success".to_string(),
            message: "Tenant added successfully".to_string(),
            tenant: tenant.into(),
        }),
    ))
}
