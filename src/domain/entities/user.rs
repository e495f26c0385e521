//! User entity representing a registered landlord account.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user (landlord) account.
///
/// The `password_hash` field holds the Argon2 hash of the user's password.
/// It never leaves the data-access layer in API responses; see
/// [`crate::api::dto::user::UserDto`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
///
/// The password must already be hashed; plaintext never reaches the
/// repository layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub phone_number: String,
}

/// Partial update for an existing user.
///
/// All fields are optional to support partial updates. `None` leaves a
/// field unchanged. The password is not updatable through this path.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}
