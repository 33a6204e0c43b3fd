//! Shared fixtures for DashFinance server tests.
//!
//! [`builder::TestBuilder`] creates an in-memory SQLite database with the requested
//! tables, [`context::TestContext`] hands out the connection and a session backed by
//! the same database, and [`factory`] inserts rows with sensible defaults so each test
//! only spells out the fields it cares about.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_finance_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let owner = factory::create_budget_owner(db).await?;
//! let budget = BudgetFactory::new(db, owner.id, admin.id).year(2024).build().await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
