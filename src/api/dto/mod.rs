//! Data Transfer Objects for request/response serialization.

pub mod auth;
pub mod health;
pub mod house;
pub mod tenant;
pub mod user;

use serde::Serialize;

/// Bare success envelope for operations that return no resource, such as
/// house deletion.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
