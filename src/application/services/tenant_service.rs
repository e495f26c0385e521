//! Tenant booking orchestration.

use std::sync::Arc;

use crate::domain::entities::{NewTenant, Tenant};
use crate::domain::repositories::TenantRepository;
use crate::error::AppError;

/// Service for booking tenants into houses.
///
/// The atomicity of "check rooms, insert tenant, decrement rooms" lives in
/// the repository transaction; this layer only shapes the call.
pub struct TenantService<T: TenantRepository> {
    tenants: Arc<T>,
}

impl<T: TenantRepository> TenantService<T> {
    /// Creates a new tenant service.
    pub fn new(tenants: Arc<T>) -> Self {
        Self { tenants }
    }

    /// Books a tenant into a house with at least one available room.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown house and
    /// [`AppError::Conflict`] when the house is full. Neither case leaves a
    /// tenant row behind or mutates the house.
    pub async fn add_tenant(&self, new_tenant: NewTenant) -> Result<Tenant, AppError> {
        self.tenants.book(new_tenant).await
    }
}
