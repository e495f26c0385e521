//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{User, UserPatch};

/// Public view of a user account.
///
/// Deliberately omits `password_hash`; the hash never appears in any API
/// response.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "FirstName must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "LastName must not be empty"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "PhoneNumber must not be empty"))]
    pub phone_number: Option<String>,
}

impl UpdateUserRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.map(|v| v.trim().to_string());
        self.first_name = self.first_name.map(|v| v.trim().to_string());
        self.last_name = self.last_name.map(|v| v.trim().to_string());
        self.phone_number = self.phone_number.map(|v| v.trim().to_string());
        self
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
        }
    }
}

/// Envelope returned on successful profile update.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub status: String,
    pub message: String,
    pub user: UserDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_has_no_password_hash() {
        let user = User {
            id: 1,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            phone_number: "0800001066".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserDto::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_absent_fields_validate_fine() {
        let req = UpdateUserRequest {
            email: None,
            first_name: None,
            last_name: None,
            phone_number: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_present_empty_field_rejected() {
        let req = UpdateUserRequest {
            email: None,
            first_name: Some("  ".to_string()),
            last_name: None,
            phone_number: None,
        };

        assert!(req.normalize().validate().is_err());
    }
}
