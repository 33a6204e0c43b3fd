//! SeaORM entities for the DashFinance schema.
//!
//! Each module mirrors one table created by the `migration` crate. Enumerated columns
//! (`role`, `status`) are stored as their upper-case string form and parsed into domain
//! enums by the server's repository layer.

pub mod prelude;

pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod transaction;
pub mod user;
pub mod user_access;
