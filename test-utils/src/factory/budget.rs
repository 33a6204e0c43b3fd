//! Budget factory for creating test budget entities.

use chrono::{Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test budgets with customizable fields.
///
/// The owner and creating user must already exist; foreign keys are enforced by
/// the in-memory SQLite database.
pub struct BudgetFactory<'a> {
    db: &'a DatabaseConnection,
    budget_owner_id: i32,
    created_by: i32,
    year: i32,
    amount_planned: f64,
    amount_revised: Option<f64>,
}

impl<'a> BudgetFactory<'a> {
    /// Creates a new BudgetFactory with default values.
    ///
    /// Defaults:
    /// - year: the current UTC year
    /// - amount_planned: `1_000_000.0`
    /// - amount_revised: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `budget_owner_id` - Owner the budget belongs to
    /// - `created_by` - ID of the user recorded as creator
    pub fn new(db: &'a DatabaseConnection, budget_owner_id: i32, created_by: i32) -> Self {
        Self {
            db,
            budget_owner_id,
            created_by,
            year: Utc::now().year(),
            amount_planned: 1_000_000.0,
            amount_revised: None,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn amount_planned(mut self, amount: f64) -> Self {
        self.amount_planned = amount;
        self
    }

    pub fn amount_revised(mut self, amount: Option<f64>) -> Self {
        self.amount_revised = amount;
        self
    }

    /// Builds and inserts the budget entity into the database.
    pub async fn build(self) -> Result<entity::budget::Model, DbErr> {
        let now = Utc::now();
        entity::budget::ActiveModel {
            budget_owner_id: ActiveValue::Set(self.budget_owner_id),
            year: ActiveValue::Set(self.year),
            amount_planned: ActiveValue::Set(self.amount_planned),
            amount_revised: ActiveValue::Set(self.amount_revised),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a budget for the current year with default amounts.
pub async fn create_budget(
    db: &DatabaseConnection,
    budget_owner_id: i32,
    created_by: i32,
) -> Result<entity::budget::Model, DbErr> {
    BudgetFactory::new(db, budget_owner_id, created_by)
        .build()
        .await
}
