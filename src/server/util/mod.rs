//! Helpers shared across the server layers.

pub mod amount;
pub mod date;
pub mod password;
pub mod search;
pub mod validate;
