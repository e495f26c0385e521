//! Core business entities.

pub mod house;
pub mod tenant;
pub mod user;

pub use house::{House, HousePatch, NewHouse};
pub use tenant::{NewTenant, Tenant};
pub use user::{NewUser, User, UserPatch};
