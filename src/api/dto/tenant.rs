//! DTOs for tenant booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewTenant, Tenant};

/// Request to book a tenant into a house.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTenantRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Firstname is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Lastname is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "PhoneNumber is required"))]
    pub phone_number: String,

    #[validate(range(min = 1, message = "HouseId of house is invalid"))]
    pub house_id: i64,
}

impl AddTenantRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self
    }

    pub fn into_new_tenant(self) -> NewTenant {
        NewTenant {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            house_id: self.house_id,
        }
    }
}

/// Public view of an occupancy record.
#[derive(Debug, Serialize)]
pub struct TenantDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub house_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tenant> for TenantDto {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            email: tenant.email,
            first_name: tenant.first_name,
            last_name: tenant.last_name,
            phone_number: tenant.phone_number,
            house_id: tenant.house_id,
            created_at: tenant.created_at,
            updated_at: tenant.updated_at,
        }
    }
}

/// Envelope returned on successful booking.
#[derive(Debug, Serialize)]
pub struct TenantResponse {
    pub status: String,
    pub message: String,
    pub tenant: TenantDto,
}
