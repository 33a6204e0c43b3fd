//! Transaction factory for creating test transaction entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test transactions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let transaction = TransactionFactory::new(&db, owner.id, category.id, user.id)
///     .amount(250.0)
///     .date(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
///     .build()
///     .await?;
/// ```
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    budget_owner_id: i32,
    category_id: i32,
    created_by: i32,
    date: DateTime<Utc>,
    amount: f64,
    description: String,
    receipt_url: Option<String>,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - date: now
    /// - amount: `100.0`
    /// - description: `"Transaction {id}"` where id is auto-incremented
    /// - receipt_url: `None`
    pub fn new(
        db: &'a DatabaseConnection,
        budget_owner_id: i32,
        category_id: i32,
        created_by: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            budget_owner_id,
            category_id,
            created_by,
            date: Utc::now(),
            amount: 100.0,
            description: format!("Transaction {}", id),
            receipt_url: None,
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn receipt_url(mut self, receipt_url: Option<&str>) -> Self {
        self.receipt_url = receipt_url.map(str::to_string);
        self
    }

    /// Builds and inserts the transaction entity into the database.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        let now = Utc::now();
        entity::transaction::ActiveModel {
            budget_owner_id: ActiveValue::Set(self.budget_owner_id),
            category_id: ActiveValue::Set(self.category_id),
            date: ActiveValue::Set(self.date),
            amount: ActiveValue::Set(self.amount),
            description: ActiveValue::Set(self.description),
            receipt_url: ActiveValue::Set(self.receipt_url),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transaction dated now with default amount and description.
pub async fn create_transaction(
    db: &DatabaseConnection,
    budget_owner_id: i32,
    category_id: i32,
    created_by: i32,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db, budget_owner_id, category_id, created_by)
        .build()
        .await
}
