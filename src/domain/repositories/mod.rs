//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account CRUD operations
//! - [`HouseRepository`] - House listing CRUD and filtered lookups
//! - [`TenantRepository`] - Transactional tenant booking

pub mod house_repository;
pub mod tenant_repository;
pub mod user_repository;

pub use house_repository::HouseRepository;
pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use house_repository::MockHouseRepository;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
