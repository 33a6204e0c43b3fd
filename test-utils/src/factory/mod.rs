//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row (a budget needs an
//! owner and a creator) take the parent IDs explicitly; the helpers module creates whole
//! hierarchies in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let owner = factory::budget_owner::create_budget_owner(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, owner, category, transaction) =
//!         factory::helpers::create_transaction_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("SUPER_ADMIN")
//!     .build()
//!     .await?;
//!
//! let budget = factory::budget::BudgetFactory::new(&db, owner.id, admin.id)
//!     .year(2025)
//!     .amount_planned(1_000.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `budget_owner` - Create budget owner entities
//! - `category` - Create category entities
//! - `budget` - Create budget entities
//! - `transaction` - Create transaction entities
//! - `user_access` - Grant a user access to a budget owner
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod budget;
pub mod budget_owner;
pub mod category;
pub mod helpers;
pub mod transaction;
pub mod user;
pub mod user_access;

// Re-export commonly used factory functions for concise usage
pub use budget::create_budget;
pub use budget_owner::create_budget_owner;
pub use category::create_category;
pub use transaction::create_transaction;
pub use user::{create_admin, create_user};
pub use user_access::create_user_access;
