//! User administration service.

use sea_orm::DatabaseConnection;

use crate::{
    model::{api::Status, user::UserRole},
    server::{
        data::{
            budget::BudgetRepository, transaction::TransactionRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            pagination::{PageRequest, Paginated},
            user::{CreateUserParams, UpdateUserParams, User},
        },
        util::{password::hash_password, validate},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after validating and normalizing the input.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Invalid email, empty name or short password
    /// - `Err(AppError::Duplicate)` - The email is already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = validate::email(&params.email)?;
        let name = validate::non_empty("Name", &params.name)?;
        validate::password(&params.password)?;

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;
        let user = user_repo
            .create(
                CreateUserParams {
                    email,
                    name,
                    ..params
                },
                password_hash,
            )
            .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<User>, AppError> {
        Ok(UserRepository::new(self.db).get_paginated(page).await?)
    }

    /// Applies a partial update.
    ///
    /// A super admin cannot demote or deactivate their own account.
    ///
    /// # Arguments
    /// - `params` - Fields to change
    /// - `current_user_id` - ID of the admin making the change
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::Validation)` - Invalid name or password, or a self lock-out
    pub async fn update(
        &self,
        params: UpdateUserParams,
        current_user_id: i32,
    ) -> Result<Option<User>, AppError> {
        if params.id == current_user_id
            && (params.role == Some(UserRole::User) || params.status == Some(Status::Inactive))
        {
            return Err(AppError::Validation(
                "You cannot remove your own admin role or deactivate your own account"
                    .to_string(),
            ));
        }

        let name = params
            .name
            .as_deref()
            .map(|name| validate::non_empty("Name", name))
            .transpose()?;

        let password_hash = match params.password.as_deref() {
            Some(password) => {
                validate::password(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(
                UpdateUserParams {
                    name,
                    password: None,
                    ..params
                },
                password_hash,
            )
            .await?;

        Ok(user)
    }

    /// Deletes a user and their access grants.
    ///
    /// Users who created budgets or transactions are kept for the audit trail and can
    /// only be deactivated.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(AppError::Validation)` - Deleting yourself, or the user owns records
    pub async fn delete(&self, id: i32, current_user_id: i32) -> Result<bool, AppError> {
        if id == current_user_id {
            return Err(AppError::Validation(
                "You cannot delete your own account".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let budgets = BudgetRepository::new(self.db).count_by_creator(id).await?;
        let transactions = TransactionRepository::new(self.db)
            .count_by_creator(id)
            .await?;
        if budgets > 0 || transactions > 0 {
            return Err(AppError::Validation(
                "Cannot delete user with existing budgets or transactions; deactivate the account instead"
                    .to_string(),
            ));
        }

        Ok(user_repo.delete(id).await?)
    }
}
