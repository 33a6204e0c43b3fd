//! Budget owner service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::budget_owner::BudgetOwnerRepository,
    error::AppError,
    model::{
        budget_owner::{
            BudgetOwner, BudgetOwnerFilter, CreateBudgetOwnerParams, UpdateBudgetOwnerParams,
        },
        pagination::{PageRequest, Paginated},
        scope::OwnerScope,
    },
    util::validate,
};

pub struct BudgetOwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetOwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a budget owner.
    ///
    /// Name is trimmed and required; code and description are trimmed with blanks
    /// dropped.
    ///
    /// # Returns
    /// - `Ok(BudgetOwner)` - The created owner
    /// - `Err(AppError::Validation)` - Empty name
    /// - `Err(AppError::Duplicate)` - Name or code already in use
    pub async fn create(&self, params: CreateBudgetOwnerParams) -> Result<BudgetOwner, AppError> {
        let name = validate::non_empty("Name", &params.name)?;
        let code = validate::optional_trimmed(params.code);
        let description = validate::optional_trimmed(params.description);

        self.ensure_name_available(&name).await?;
        if let Some(code) = &code {
            self.ensure_code_available(code).await?;
        }

        let owner = BudgetOwnerRepository::new(self.db)
            .create(CreateBudgetOwnerParams {
                name,
                code,
                description,
                status: params.status,
            })
            .await?;

        Ok(owner)
    }

    /// Gets an owner if it exists and is visible in `scope`.
    pub async fn get_by_id(
        &self,
        id: i32,
        scope: &OwnerScope,
    ) -> Result<Option<BudgetOwner>, AppError> {
        if !scope.allows(id) {
            return Ok(None);
        }

        Ok(BudgetOwnerRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: BudgetOwnerFilter,
        page: PageRequest,
    ) -> Result<Paginated<BudgetOwner>, AppError> {
        let filter = BudgetOwnerFilter {
            search: validate::optional_trimmed(filter.search),
            ..filter
        };

        Ok(BudgetOwnerRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?)
    }

    /// Applies a partial update, re-checking name and code only when they change.
    ///
    /// # Returns
    /// - `Ok(Some(BudgetOwner))` - The updated owner
    /// - `Ok(None)` - No owner with that ID
    /// - `Err(AppError::Validation)` - Empty name
    /// - `Err(AppError::Duplicate)` - New name or code already in use
    pub async fn update(
        &self,
        params: UpdateBudgetOwnerParams,
    ) -> Result<Option<BudgetOwner>, AppError> {
        let owner_repo = BudgetOwnerRepository::new(self.db);

        let Some(existing) = owner_repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| validate::non_empty("Name", name))
            .transpose()?;
        if let Some(name) = &name {
            if *name != existing.name {
                self.ensure_name_available(name).await?;
            }
        }

        let code = params.code.map(validate::optional_trimmed);
        if let Some(Some(code)) = &code {
            if existing.code.as_deref() != Some(code.as_str()) {
                self.ensure_code_available(code).await?;
            }
        }

        let description = params.description.map(validate::optional_trimmed);

        let owner = owner_repo
            .update(UpdateBudgetOwnerParams {
                id: params.id,
                name,
                code,
                description,
                status: params.status,
            })
            .await?;

        Ok(owner)
    }

    /// Deletes an owner; returns `false` if it didn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(BudgetOwnerRepository::new(self.db).delete(id).await?)
    }

    async fn ensure_name_available(&self, name: &str) -> Result<(), AppError> {
        if BudgetOwnerRepository::new(self.db)
            .find_by_name(name)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(
                "Budget owner with this name already exists".to_string(),
            ));
        }
        Ok(())
    }

    async fn ensure_code_available(&self, code: &str) -> Result<(), AppError> {
        if BudgetOwnerRepository::new(self.db)
            .find_by_code(code)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(
                "Budget owner with this code already exists".to_string(),
            ));
        }
        Ok(())
    }
}
