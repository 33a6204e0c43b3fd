//! Transaction service.
//!
//! Applies the owner scope to every operation and restricts changes to the creator of a
//! transaction or a super admin.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        budget_owner::BudgetOwnerRepository, category::CategoryRepository,
        transaction::TransactionRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        pagination::{PageRequest, Paginated},
        scope::OwnerScope,
        transaction::{
            CreateTransactionParams, Transaction, TransactionFilter, UpdateTransactionParams,
        },
        user::User,
    },
    util::{
        date::{day_end_exclusive, year_range},
        validate,
    },
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a transaction for an owner in the caller's scope.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The created transaction with related names
    /// - `Err(AppError::Validation)` - Non-positive amount or empty description
    /// - `Err(AppError::NotFound)` - Owner missing or out of scope, or category missing
    pub async fn create(
        &self,
        params: CreateTransactionParams,
        scope: &OwnerScope,
    ) -> Result<Transaction, AppError> {
        let amount = validate::positive("Amount", params.amount)?;
        let description = validate::non_empty("Description", &params.description)?;
        let receipt_url = validate::optional_trimmed(params.receipt_url);

        self.ensure_owner_in_scope(params.budget_owner_id, scope)
            .await?;
        self.ensure_category_exists(params.category_id).await?;

        let transaction = TransactionRepository::new(self.db)
            .create(CreateTransactionParams {
                amount,
                description,
                receipt_url,
                ..params
            })
            .await?;

        Ok(transaction)
    }

    /// Gets a transaction if its owner is visible in `scope`.
    pub async fn get_by_id(
        &self,
        id: i32,
        scope: &OwnerScope,
    ) -> Result<Option<Transaction>, AppError> {
        let transaction = TransactionRepository::new(self.db).find_by_id(id).await?;

        Ok(transaction.filter(|t| scope.allows(t.budget_owner_id)))
    }

    /// Lists transactions visible in `scope`, newest first.
    ///
    /// # Returns
    /// - `Ok(Paginated<Transaction>)` - The requested page
    /// - `Err(AppError::Validation)` - `start_date` is after `end_date`, or a date or
    ///   year filter is outside the supported calendar range
    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: TransactionFilter,
        page: PageRequest,
    ) -> Result<Paginated<Transaction>, AppError> {
        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            if start > end {
                return Err(AppError::Validation(
                    "start_date must not be after end_date".to_string(),
                ));
            }
        }
        if let Some(end) = filter.end_date {
            if day_end_exclusive(end).is_none() {
                return Err(AppError::Validation(format!("end_date {} is out of range", end)));
            }
        }
        if let Some(year) = filter.year {
            if year_range(year).is_none() {
                return Err(AppError::Validation(format!("Year {} is out of range", year)));
            }
        }

        Ok(TransactionRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?)
    }

    /// Applies a partial update on behalf of `user`.
    ///
    /// # Returns
    /// - `Ok(Some(Transaction))` - The updated transaction
    /// - `Ok(None)` - Missing or out of scope
    /// - `Err(AuthError::NotCreator)` - `user` is neither the creator nor a super admin
    /// - `Err(AppError::Validation)` - Invalid amount or description
    /// - `Err(AppError::NotFound)` - New owner or category missing or out of scope
    pub async fn update(
        &self,
        params: UpdateTransactionParams,
        user: &User,
        scope: &OwnerScope,
    ) -> Result<Option<Transaction>, AppError> {
        let Some(existing) = self.get_by_id(params.id, scope).await? else {
            return Ok(None);
        };
        Self::ensure_can_modify(&existing, user)?;

        let amount = params
            .amount
            .map(|amount| validate::positive("Amount", amount))
            .transpose()?;
        let description = params
            .description
            .as_deref()
            .map(|description| validate::non_empty("Description", description))
            .transpose()?;

        if let Some(budget_owner_id) = params.budget_owner_id {
            if budget_owner_id != existing.budget_owner_id {
                self.ensure_owner_in_scope(budget_owner_id, scope).await?;
            }
        }
        if let Some(category_id) = params.category_id {
            if category_id != existing.category_id {
                self.ensure_category_exists(category_id).await?;
            }
        }

        let transaction = TransactionRepository::new(self.db)
            .update(UpdateTransactionParams {
                amount,
                description,
                receipt_url: params.receipt_url.map(validate::optional_trimmed),
                ..params
            })
            .await?;

        Ok(transaction)
    }

    /// Deletes a transaction on behalf of `user`.
    ///
    /// # Returns
    /// - `Ok(true)` - The transaction was deleted
    /// - `Ok(false)` - Missing or out of scope
    /// - `Err(AuthError::NotCreator)` - `user` is neither the creator nor a super admin
    pub async fn delete(&self, id: i32, user: &User, scope: &OwnerScope) -> Result<bool, AppError> {
        let Some(existing) = self.get_by_id(id, scope).await? else {
            return Ok(false);
        };
        Self::ensure_can_modify(&existing, user)?;

        Ok(TransactionRepository::new(self.db).delete(id).await?)
    }

    fn ensure_can_modify(transaction: &Transaction, user: &User) -> Result<(), AppError> {
        if transaction.created_by != user.id && !user.is_super_admin() {
            return Err(AuthError::NotCreator(
                user.id,
                "Only the creator or a super admin can modify this transaction".to_string(),
            )
            .into());
        }
        Ok(())
    }

    async fn ensure_owner_in_scope(
        &self,
        budget_owner_id: i32,
        scope: &OwnerScope,
    ) -> Result<(), AppError> {
        let owner = if scope.allows(budget_owner_id) {
            BudgetOwnerRepository::new(self.db)
                .find_by_id(budget_owner_id)
                .await?
        } else {
            None
        };

        if owner.is_none() {
            return Err(AppError::NotFound("Budget owner not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: i32) -> Result<(), AppError> {
        if CategoryRepository::new(self.db)
            .find_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Category not found".to_string()));
        }
        Ok(())
    }
}
