//! House entity representing a rentable property listing.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A rentable property owned by a landlord.
///
/// # Invariants
///
/// - `available_rooms` never goes negative; each successful tenant booking
///   decrements it by exactly one via an atomic conditional update
///   (see [`crate::domain::repositories::TenantRepository::book`]).
/// - `user_id` references the owning landlord and is set by the server
///   from the authenticated principal, never from client input.
#[derive(Debug, Clone, FromRow)]
pub struct House {
    pub id: i64,
    pub house_type: String,
    pub state: String,
    pub description: String,
    pub location: String,
    pub rooms: i32,
    pub available_rooms: i32,
    pub bathrooms: i32,
    pub price: i64,
    pub long_lat: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new house listing.
#[derive(Debug, Clone)]
pub struct NewHouse {
    pub house_type: String,
    pub state: String,
    pub description: String,
    pub location: String,
    pub rooms: i32,
    pub available_rooms: i32,
    pub bathrooms: i32,
    pub price: i64,
    pub long_lat: String,
    /// Owning landlord. Overwritten with the authenticated principal by
    /// [`crate::application::services::HouseService::create_house`].
    pub user_id: i64,
}

/// Partial update for an existing house.
///
/// All fields are optional to support partial updates. `None` leaves a
/// field unchanged. `available_rooms` and `user_id` are deliberately
/// absent: room availability is only mutated by the booking flow, and
/// ownership never transfers.
#[derive(Debug, Clone, Default)]
pub struct HousePatch {
    pub house_type: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub price: Option<i64>,
    pub long_lat: Option<String>,
}
