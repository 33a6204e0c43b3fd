//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, resolves the caller's budget owner
//! scope where the resource is scoped, converts DTOs into service parameters and maps
//! the result back to a DTO with the matching status code. Handlers carry
//! `#[utoipa::path]` annotations collected into the OpenAPI document in `router`.

pub mod auth;
pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod health;
pub mod transaction;
pub mod user;
