//! Budget owner access grants and scope resolution.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        budget_owner::BudgetOwnerRepository, user::UserRepository,
        user_access::UserAccessRepository,
    },
    error::AppError,
    model::{budget_owner::BudgetOwner, scope::OwnerScope, user::User},
};

pub struct UserAccessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAccessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the budget owners `user` may see.
    ///
    /// # Returns
    /// - `OwnerScope::All` - For super admins
    /// - `OwnerScope::Only(ids)` - The granted owners for everyone else
    pub async fn scope_for(&self, user: &User) -> Result<OwnerScope, AppError> {
        if user.is_super_admin() {
            return Ok(OwnerScope::All);
        }

        let owner_ids = UserAccessRepository::new(self.db)
            .owner_ids_for_user(user.id)
            .await?;

        Ok(OwnerScope::Only(owner_ids))
    }

    /// Lists the owners granted to a user.
    ///
    /// # Returns
    /// - `Ok(Some(owners))` - Granted owners ordered by name
    /// - `Ok(None)` - No user with that ID
    pub async fn list(&self, user_id: i32) -> Result<Option<Vec<BudgetOwner>>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let owners = UserAccessRepository::new(self.db)
            .owners_for_user(user_id)
            .await?;

        Ok(Some(owners))
    }

    /// Grants a user access to a budget owner.
    ///
    /// # Returns
    /// - `Ok(BudgetOwner)` - The owner now visible to the user
    /// - `Err(AppError::NotFound)` - The user or the owner doesn't exist
    /// - `Err(AppError::Duplicate)` - The grant already exists
    pub async fn grant(&self, user_id: i32, budget_owner_id: i32) -> Result<BudgetOwner, AppError> {
        let access_repo = UserAccessRepository::new(self.db);

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let Some(owner) = BudgetOwnerRepository::new(self.db)
            .find_by_id(budget_owner_id)
            .await?
        else {
            return Err(AppError::NotFound("Budget owner not found".to_string()));
        };

        if access_repo.exists(user_id, budget_owner_id).await? {
            return Err(AppError::Duplicate(
                "User already has access to this budget owner".to_string(),
            ));
        }

        access_repo.grant(user_id, budget_owner_id).await?;

        Ok(owner)
    }

    /// Revokes a grant; returns `false` if it didn't exist.
    pub async fn revoke(&self, user_id: i32, budget_owner_id: i32) -> Result<bool, AppError> {
        Ok(UserAccessRepository::new(self.db)
            .revoke(user_id, budget_owner_id)
            .await?)
    }
}
