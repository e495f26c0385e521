//! DTOs for house endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{House, HousePatch, NewHouse};

/// Request to create a house listing.
///
/// Any client-supplied owner id is ignored; ownership always comes from
/// the authenticated principal.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHouseRequest {
    #[validate(length(min = 1, message = "HouseType is required"))]
    pub house_type: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Description about house is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Location of house is required"))]
    pub location: String,

    #[validate(range(min = 0, message = "Number of Rooms of house is invalid"))]
    pub rooms: i32,

    #[validate(range(min = 0, message = "Number of AvailableRooms of house is invalid"))]
    pub available_rooms: i32,

    #[validate(range(min = 0, message = "Number of BathRooms of house is invalid"))]
    pub bathrooms: i32,

    #[validate(range(min = 0, message = "Price of house is invalid"))]
    pub price: i64,

    #[serde(default)]
    pub long_lat: String,
}

impl CreateHouseRequest {
    /// Strips surrounding whitespace from the free-text fields.
    pub fn normalize(mut self) -> Self {
        self.house_type = self.house_type.trim().to_string();
        self.state = self.state.trim().to_string();
        self.description = self.description.trim().to_string();
        self.location = self.location.trim().to_string();
        self.long_lat = self.long_lat.trim().to_string();
        self
    }

    /// Converts into repository input. The owner id placed here is a
    /// placeholder; [`crate::application::services::HouseService`]
    /// overwrites it with the principal.
    pub fn into_new_house(self) -> NewHouse {
        NewHouse {
            house_type: self.house_type,
            state: self.state,
            description: self.description,
            location: self.location,
            rooms: self.rooms,
            available_rooms: self.available_rooms,
            bathrooms: self.bathrooms,
            price: self.price,
            long_lat: self.long_lat,
            user_id: 0,
        }
    }
}

/// Partial listing update. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHouseRequest {
    #[validate(length(min = 1, message = "HouseType must not be empty"))]
    pub house_type: Option<String>,

    #[validate(length(min = 1, message = "State must not be empty"))]
    pub state: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Location must not be empty"))]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Number of Rooms of house is invalid"))]
    pub rooms: Option<i32>,

    #[validate(range(min = 0, message = "Number of BathRooms of house is invalid"))]
    pub bathrooms: Option<i32>,

    #[validate(range(min = 0, message = "Price of house is invalid"))]
    pub price: Option<i64>,

    pub long_lat: Option<String>,
}

impl UpdateHouseRequest {
    pub fn normalize(mut self) -> Self {
        self.house_type = self.house_type.map(|v| v.trim().to_string());
        self.state = self.state.map(|v| v.trim().to_string());
        self.description = self.description.map(|v| v.trim().to_string());
        self.location = self.location.map(|v| v.trim().to_string());
        self.long_lat = self.long_lat.map(|v| v.trim().to_string());
        self
    }

    pub fn into_patch(self) -> HousePatch {
        HousePatch {
            house_type: self.house_type,
            state: self.state,
            description: self.description,
            location: self.location,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            price: self.price,
            long_lat: self.long_lat,
        }
    }
}

/// Public view of a house listing.
#[derive(Debug, Serialize)]
pub struct HouseDto {
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

impl From<House> for HouseDto {
    fn from(house: House) -> Self {
        Self {
            id: house.id,
            house_type: house.house_type,
            state: house.state,
            description: house.description,
            location: house.location,
            rooms: house.rooms,
            available_rooms: house.available_rooms,
            bathrooms: house.bathrooms,
            price: house.price,
            long_lat: house.long_lat,
            user_id: house.user_id,
            created_at: house.created_at,
            updated_at: house.updated_at,
        }
    }
}

/// Envelope returned by house mutations.
#[derive(Debug, Serialize)]
pub struct HouseResponse {
    pub status: String,
    pub message: String,
    pub house: HouseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateHouseRequest {
        CreateHouseRequest {
            house_type: " duplex ".to_string(),
            state: "Lagos".to_string(),
            description: "Two floors".to_string(),
            location: "12 Marina Rd".to_string(),
            rooms: 4,
            available_rooms: 4,
            bathrooms: 2,
            price: 250_000,
            long_lat: " 6.4541,3.3947 ".to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_text_fields() {
        let normalized = request().normalize();
        assert_eq!(normalized.house_type, "duplex");
        assert_eq!(normalized.long_lat, "6.4541,3.3947");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut req = request();
        req.price = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_rooms_rejected() {
        let mut req = request();
        req.rooms = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_description_rejected() {
        let mut req = request();
        req.description = "  ".to_string();
        assert!(req.normalize().validate().is_err());
    }
}
