//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, HouseService, TenantService, UserService};
use crate::infrastructure::persistence::{PgHouseRepository, PgTenantRepository, PgUserRepository};

/// Shared application state.
///
/// Services are stored behind `Arc` so cloning the state per request is
/// cheap. The raw pool is kept for the health probe only; all data access
/// goes through the services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub house_service: Arc<HouseService<PgHouseRepository>>,
    pub tenant_service: Arc<TenantService<PgTenantRepository>>,
    pub db: PgPool,
}

impl AppState {
    /// Wires repositories and services onto a connection pool.
    pub fn new(pool: PgPool, jwt_secret: String, token_ttl_hours: i64) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let user_repository = Arc::new(PgUserRepository::new(pool_arc.clone()));
        let house_repository = Arc::new(PgHouseRepository::new(pool_arc.clone()));
        let tenant_repository = Arc::new(PgTenantRepository::new(pool_arc));

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repository.clone(),
                jwt_secret,
                token_ttl_hours,
            )),
            user_service: Arc::new(UserService::new(user_repository)),
            house_service: Arc::new(HouseService::new(house_repository)),
            tenant_service: Arc::new(TenantService::new(tenant_repository)),
            db: pool,
        }
    }
}
