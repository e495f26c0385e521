//! Repository trait for house listing data access.

use crate::domain::entities::{House, HousePatch, NewHouse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing house listings.
///
/// Provides CRUD operations plus the filtered lookups used by the public
/// browse endpoints (by landlord, by state).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHouseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// Creates a new house listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_house: NewHouse) -> Result<House, AppError>;

    /// Finds a house by database id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<House>, AppError>;

    /// Lists all house listings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<House>, AppError>;

    /// Lists all houses owned by the given landlord.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_landlord(&self, user_id: i64) -> Result<Vec<House>, AppError>;

    /// Lists all houses in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_state(&self, state: &str) -> Result<Vec<House>, AppError>;

    /// Partially updates a house.
    ///
    /// Only fields present in [`HousePatch`] are modified. `None` fields are
    /// unchanged. Room availability is not updatable through this path; it
    /// only moves through [`crate::domain::repositories::TenantRepository::book`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no house matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: HousePatch) -> Result<House, AppError>;

    /// Deletes a house.
    ///
    /// Returns `Ok(true)` if the house was found and deleted, `Ok(false)`
    /// if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if tenants still reference the house.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
