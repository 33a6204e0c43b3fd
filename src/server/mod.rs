//! DashFinance REST API.
//!
//! Axum handles HTTP, SeaORM talks to SQLite and tower-sessions keeps the logged in
//! user in a cookie backed session stored in the same database.
//!
//! # Layers
//!
//! - `controller/` - Handlers. Each one authenticates through the [`middleware::auth::AuthGuard`],
//!   resolves the caller's [`model::scope::OwnerScope`] and maps DTOs to params.
//! - `service/` - Validation, duplicate checks, scope enforcement and utilization math.
//! - `data/` - Repositories returning domain models; the only place entities appear.
//! - `model/` - Domain models, params, pagination and owner scope.
//! - `error/` - [`error::AppError`] and its mapping to status codes and `ErrorDto` bodies.
//! - `middleware/` - Typed session access and the role check.
//!
//! Supporting modules: `config` reads the environment, `startup` connects the
//! database and session store, creates the bootstrap admin and optionally seeds
//! demo data, and `router` wires routes plus the OpenAPI document.
//!
//! Services never see a `Session`. Owner visibility is decided once in the
//! controller and passed down as an `OwnerScope`, so every query that lists or
//! loads owner bound rows is filtered the same way.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
