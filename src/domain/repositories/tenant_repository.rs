//! Repository trait for tenant booking.

use crate::domain::entities::{NewTenant, Tenant};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for booking tenants into houses.
///
/// The only write path for tenants is [`TenantRepository::book`], which
/// couples the tenant insert to the room decrement in one transaction so
/// that a house can never be oversubscribed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTenantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Books a tenant into the house referenced by `new_tenant.house_id`.
    ///
    /// Runs in a single transaction:
    ///
    /// 1. Conditionally decrement `available_rooms` with a
    ///    `WHERE available_rooms > 0` guard.
    /// 2. Insert the tenant row.
    ///
    /// Two concurrent bookings on a house with one room left cannot both
    /// succeed. A failed booking leaves no tenant row and the house
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the house does not exist.
    /// Returns [`AppError::Conflict`] if the house has no available rooms.
    /// Returns [`AppError::Internal`] on database errors.
    async fn book(&self, new_tenant: NewTenant) -> Result<Tenant, AppError>;
}
