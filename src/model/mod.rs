//! Data transfer objects shared by the server API and the web client.
//!
//! Everything here is plain serde data so it compiles for both the `server` and
//! `web` targets. Server builds additionally derive `utoipa::ToSchema` for the
//! OpenAPI document.

pub mod api;
pub mod auth;
pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod transaction;
pub mod user;
