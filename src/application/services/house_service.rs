//! House listing business rules.

use serde_json::json;
use std::sync::Arc;

use crate::application::authorization::ensure_owner;
use crate::domain::entities::{House, HousePatch, NewHouse};
use crate::domain::repositories::HouseRepository;
use crate::error::AppError;

/// Service for creating, browsing, and mutating house listings.
///
/// Reads are public; every mutation requires the acting principal and
/// checks ownership before touching the repository.
pub struct HouseService<H: HouseRepository> {
    houses: Arc<H>,
}

impl<H: HouseRepository> HouseService<H> {
    /// Creates a new house service.
    pub fn new(houses: Arc<H>) -> Self {
        Self { houses }
    }

    /// Creates a listing owned by the principal.
    ///
    /// The owner id in `new_house` is overwritten with `principal`;
    /// client-supplied owner values are never trusted.
    pub async fn create_house(
        &self,
        principal: i64,
        mut new_house: NewHouse,
    ) -> Result<House, AppError> {
        new_house.user_id = principal;
        self.houses.create(new_house).await
    }

    /// Retrieves a single listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no house matches `id`.
    pub async fn get_house(&self, id: i64) -> Result<House, AppError> {
        self.houses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("House not found", json!({ "id": id })))
    }

    /// Lists all houses.
    pub async fn list_houses(&self) -> Result<Vec<House>, AppError> {
        self.houses.list().await
    }

    /// Lists all houses owned by a landlord.
    pub async fn list_by_landlord(&self, user_id: i64) -> Result<Vec<House>, AppError> {
        self.houses.list_by_landlord(user_id).await
    }

    /// Lists all houses in a state.
    pub async fn list_by_state(&self, state: &str) -> Result<Vec<House>, AppError> {
        self.houses.list_by_state(state).await
    }

    /// Partially updates a listing owned by the principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the house does not exist and
    /// [`AppError::Unauthorized`] if the principal does not own it.
    pub async fn update_house(
        &self,
        principal: i64,
        id: i64,
        patch: HousePatch,
    ) -> Result<House, AppError> {
        let house = self.get_house(id).await?;
        ensure_owner(principal, house.user_id)?;

        self.houses.update(id, patch).await
    }

    /// Deletes a listing owned by the principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the house does not exist,
    /// [`AppError::Unauthorized`] if the principal does not own it, and
    /// [`AppError::Conflict`] if tenants still reference it.
    pub async fn delete_house(&self, principal: i64, id: i64) -> Result<(), AppError> {
        let house = self.get_house(id).await?;
        ensure_owner(principal, house.user_id)?;

        if !self.houses.delete(id).await? {
            return Err(AppError::not_found("House not found", json!({ "id": id })));
        }
        Ok(())
    }
}
