#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod budget;

#[cfg(feature = "web")]
pub mod budget_owner;

#[cfg(feature = "web")]
pub mod category;

#[cfg(feature = "web")]
pub mod transaction;

#[cfg(feature = "web")]
pub mod user;
