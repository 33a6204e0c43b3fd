//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Stored enum strings (role, status) are parsed here so the rest of the server only
//! deals with typed values.

pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod pagination;
pub mod scope;
pub mod transaction;
pub mod user;

use sea_orm::DbErr;

use crate::model::api::Status;

/// Parses a stored status column, failing with `DbErr::Custom` on unknown values.
pub(crate) fn parse_status(value: &str) -> Result<Status, DbErr> {
    Status::parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown status '{}'", value)))
}
