//! Budget owner factory for creating test budget owner entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test budget owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let owner = BudgetOwnerFactory::new(&db)
///     .name("Information Technology")
///     .code(Some("IT"))
///     .build()
///     .await?;
/// ```
pub struct BudgetOwnerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: Option<String>,
    description: Option<String>,
    status: String,
}

impl<'a> BudgetOwnerFactory<'a> {
    /// Creates a new BudgetOwnerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Owner {id}"` where id is auto-incremented
    /// - code: `Some("BO{id}")`
    /// - description: `None`
    /// - status: `"ACTIVE"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Owner {}", id),
            code: Some(format!("BO{}", id)),
            description: None,
            status: "ACTIVE".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: Option<&str>) -> Self {
        self.code = code.map(str::to_string);
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the budget owner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::budget_owner::Model)` - Created budget owner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::budget_owner::Model, DbErr> {
        let now = Utc::now();
        entity::budget_owner::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active budget owner with default values.
pub async fn create_budget_owner(
    db: &DatabaseConnection,
) -> Result<entity::budget_owner::Model, DbErr> {
    BudgetOwnerFactory::new(db).build().await
}
