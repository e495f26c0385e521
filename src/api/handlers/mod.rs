//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod houses;
pub mod tenants;
pub mod users;

pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use houses::{
    house_create_handler, house_delete_handler, house_get_handler, house_list_handler,
    house_update_handler, houses_by_landlord_handler, houses_by_state_handler,
};
pub use tenants::tenant_add_handler;
pub use users::{user_get_handler, user_list_handler, user_update_handler};
