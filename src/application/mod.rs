//! Application layer: business rules and authorization.

pub mod authorization;
pub mod services;
