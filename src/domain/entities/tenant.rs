//! Tenant entity representing an occupancy record.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An occupancy record linking a person to exactly one house.
///
/// Created only through the booking flow, which atomically decrements the
/// house's available room count in the same transaction.
#[derive(Debug, Clone, FromRow)]
pub struct Tenant {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub house_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for booking a tenant into a house.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub house_id: i64,
}
