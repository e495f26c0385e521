//! Handlers for house listing endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::StatusResponse;
use crate::api::dto::house::{
    CreateHouseRequest, HouseDto, HouseResponse, UpdateHouseRequest,
};
use crate::api::middleware::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a house listing owned by the authenticated landlord.
///
/// # Endpoint
///
/// `POST /api/houses` (authenticated)
///
/// The owner is always the token's principal; any client-supplied owner id
/// is discarded.
pub async fn house_create_handler(
    State(state): State<AppState>,
    Extension(Principal(principal)): Extension<Principal>,
    Json(payload): Json<CreateHouseRequest>,
) -> Result<(StatusCode, Json<HouseResponse>), AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    if payload.available_rooms > payload.rooms {
        return Err(AppError::bad_request(
            "AvailableRooms cannot exceed Rooms",
            serde_json::json!({
                "rooms": payload.rooms,
                "available_rooms": payload.available_rooms
            }),
        ));
    }

    let house = state
        .house_service
        .create_house(principal, payload.into_new_house())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(HouseResponse {
            status: "success".to_string(),
            message: "House successfully created".to_string(),
            house: house.into(),
        }),
    ))
}

/// Lists all house listings.
///
/// # Endpoint
///
/// `GET /api/houses` (public)
pub async fn house_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HouseDto>>, AppError> {
    let houses = state.house_service.list_houses().await?;

    Ok(Json(houses.into_iter().map(HouseDto::from).collect()))
}

/// Retrieves a house by id.
///
/// # Endpoint
///
/// `GET /api/houses/{id}` (public)
pub async fn house_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<HouseDto>, AppError> {
    let house = state.house_service.get_house(id).await?;

    Ok(Json(house.into()))
}

/// Lists houses filtered by state.
///
/// # Endpoint
///
/// `GET /api/houses/state/{state}` (public)
pub async fn houses_by_state_handler(
    Path(state_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<HouseDto>>, AppError> {
    let houses = state.house_service.list_by_state(&state_name).await?;

    Ok(Json(houses.into_iter().map(HouseDto::from).collect()))
}

/// Lists houses owned by a landlord.
///
/// # Endpoint
///
/// `GET /api/houses/landlord/{id}` (public)
pub async fn houses_by_landlord_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<HouseDto>>, AppError> {
    let houses = state.house_service.list_by_landlord(id).await?;

    Ok(Json(houses.into_iter().map(HouseDto::from).collect()))
}

/// Partially updates a house owned by the authenticated landlord.
///
/// # Endpoint
///
/// `PUT /api/houses/{id}` (authenticated)
///
/// # Errors
///
/// Returns 401 if the principal does not own the house, 404 if it does not
/// exist.
pub async fn house_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(Principal(principal)): Extension<Principal>,
    Json(payload): Json<UpdateHouseRequest>,
) -> Result<Json<HouseResponse>, AppError> {
    let payload = payload.normalize();
    payload.validate()?;

    let house = state
        .house_service
        .update_house(principal, id, payload.into_patch())
        .await?;

    Ok(Json(HouseResponse {
        status: "success".to_string(),
        message: "House updated successfully".to_string(),
        house: house.into(),
    }))
}

/// Deletes a house owned by the authenticated landlord.
///
/// # Endpoint
///
/// `DELETE /api/houses/{id}` (authenticated)
///
/// # Errors
///
/// Returns 401 if the principal does not own the house, 404 if it does not
/// exist, 409 if tenants still reference it.
pub async fn house_delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(Principal(principal)): Extension<Principal>,
) -> Result<Json<StatusResponse>, AppError> {
    state.house_service.delete_house(principal, id).await?;

    Ok(Json(StatusResponse::success("House deleted successfully")))
}
