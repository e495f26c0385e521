//! Shared pure helpers.

pub mod password;
