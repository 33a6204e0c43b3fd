//! User access repository.
//!
//! Manages the `user_access` join table that grants ordinary users visibility into
//! individual budget owners.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::budget_owner::BudgetOwner;

pub struct UserAccessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAccessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants `user_id` access to `budget_owner_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Access granted
    /// - `Err(DbErr)` - Database error, including a unique violation for an existing grant
    pub async fn grant(&self, user_id: i32, budget_owner_id: i32) -> Result<(), DbErr> {
        entity::user_access::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            budget_owner_id: ActiveValue::Set(budget_owner_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: i32, budget_owner_id: i32) -> Result<bool, DbErr> {
        let grant = entity::prelude::UserAccess::find_by_id((user_id, budget_owner_id))
            .one(self.db)
            .await?;

        Ok(grant.is_some())
    }

    /// Revokes a grant.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was removed
    /// - `Ok(false)` - No such grant
    pub async fn revoke(&self, user_id: i32, budget_owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserAccess::delete_by_id((user_id, budget_owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the IDs of the owners granted to a user.
    pub async fn owner_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserAccess::find()
            .select_only()
            .column(entity::user_access::Column::BudgetOwnerId)
            .filter(entity::user_access::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the owners granted to a user, ordered by name.
    pub async fn owners_for_user(&self, user_id: i32) -> Result<Vec<BudgetOwner>, DbErr> {
        entity::prelude::BudgetOwner::find()
            .join(
                JoinType::InnerJoin,
                entity::budget_owner::Relation::UserAccess.def(),
            )
            .filter(entity::user_access::Column::UserId.eq(user_id))
            .order_by_asc(entity::budget_owner::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(BudgetOwner::from_entity)
            .collect()
    }
}
