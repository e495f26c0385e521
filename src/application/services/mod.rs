//! Business logic services for the application layer.

pub mod auth_service;
pub mod house_service;
pub mod tenant_service;
pub mod user_service;

pub use auth_service::{AuthService, Claims, RegisterData};
pub use house_service::HouseService;
pub use tenant_service::TenantService;
pub use user_service::UserService;
