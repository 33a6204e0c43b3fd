//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, duplicate checks and ownership rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Scoping**: Narrowing reads and writes to the budget owners a user may see

pub mod auth;
pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod transaction;
pub mod user;
pub mod user_access;

#[cfg(test)]
mod test;
