//! Factory for granting users access to budget owners.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants `user_id` visibility into `budget_owner_id`.
///
/// # Returns
/// - `Ok(entity::user_access::Model)` - Created access row
/// - `Err(DbErr)` - Database error, including a duplicate pair
pub async fn create_user_access(
    db: &DatabaseConnection,
    user_id: i32,
    budget_owner_id: i32,
) -> Result<entity::user_access::Model, DbErr> {
    entity::user_access::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        budget_owner_id: ActiveValue::Set(budget_owner_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
