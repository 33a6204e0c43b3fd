//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name or email to prevent collisions with unique indexes.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a budget along with its owner and creating user.
///
/// All entities are created with default values. The budget is for the
/// current year with a planned amount of 1,000,000.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, owner, budget))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_budget_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::budget_owner::Model,
        entity::budget::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let owner = crate::factory::budget_owner::create_budget_owner(db).await?;
    let budget = crate::factory::budget::create_budget(db, owner.id, user.id).await?;

    Ok((user, owner, budget))
}

/// Creates a transaction along with its owner, category and creating user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, owner, category, transaction))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_transaction_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::budget_owner::Model,
        entity::category::Model,
        entity::transaction::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let owner = crate::factory::budget_owner::create_budget_owner(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let transaction =
        crate::factory::transaction::create_transaction(db, owner.id, category.id, user.id)
            .await?;

    Ok((user, owner, category, transaction))
}
