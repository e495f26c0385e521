//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::user::UserDto;

/// Request to register a new landlord account.
///
/// All fields are required and must be non-empty after trimming.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "FirstName is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "LastName is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "PhoneNumber is required"))]
    pub phone_number: String,
}

impl RegisterRequest {
    /// Strips surrounding whitespace so validation sees the real values.
    /// The password is left untouched.
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self
    }
}

/// Request to log in with email and password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }
}

/// Envelope returned on successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: String,
    pub message: String,
    pub user: UserDto,
}

/// Envelope returned on successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "  ada@example.com ".to_string(),
            first_name: " Ada".to_string(),
            last_name: "Lovelace ".to_string(),
            password: " spaces kept ".to_string(),
            phone_number: " 0800001066 ".to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_all_but_password() {
        let normalized = request().normalize();

        assert_eq!(normalized.email, "ada@example.com");
        assert_eq!(normalized.first_name, "Ada");
        assert_eq!(normalized.last_name, "Lovelace");
        assert_eq!(normalized.phone_number, "0800001066");
        assert_eq!(normalized.password, " spaces kept ");
    }

    #[test]
    fn test_whitespace_only_field_fails_validation_after_normalize() {
        let mut req = request();
        req.first_name = "   ".to_string();

        assert!(req.normalize().validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request().normalize();
        req.email = "not-an-email".to_string();

        assert!(req.validate().is_err());
    }
}
