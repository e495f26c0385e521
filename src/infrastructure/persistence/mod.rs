//! PostgreSQL repository implementations.

pub mod pg_house_repository;
pub mod pg_tenant_repository;
pub mod pg_user_repository;

pub use pg_house_repository::PgHouseRepository;
pub use pg_tenant_repository::PgTenantRepository;
pub use pg_user_repository::PgUserRepository;
