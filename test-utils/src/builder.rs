use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects entity tables, then creates them in a fresh in-memory database.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(BudgetOwner)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Executed in insertion order by `build()`
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the CREATE TABLE statement for `entity`.
    ///
    /// Add referenced tables before the tables that point at them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every DashFinance table in dependency order.
    ///
    /// This convenience method adds the following tables:
    /// - User
    /// - BudgetOwner
    /// - Category
    /// - Budget
    /// - Transaction
    /// - UserAccess
    ///
    /// Most repository and service tests touch several of these through foreign keys,
    /// so this is the usual starting point.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_finance_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_finance_tables(self) -> Self {
        self.with_table(User)
            .with_table(BudgetOwner)
            .with_table(Category)
            .with_table(Budget)
            .with_table(Transaction)
            .with_table(UserAccess)
    }

    /// Opens the database and creates every configured table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}
