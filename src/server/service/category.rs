//! Category service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, transaction::TransactionRepository},
    error::AppError,
    model::{
        category::{Category, CategoryFilter, CreateCategoryParams, UpdateCategoryParams},
        pagination::{PageRequest, Paginated},
    },
    util::validate,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category with a name unique regardless of ASCII case.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(AppError::Validation)` - Empty name
    /// - `Err(AppError::Duplicate)` - Name already in use
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let name = validate::non_empty("Name", &params.name)?;
        self.ensure_name_available(&name, None).await?;

        let category = CategoryRepository::new(self.db)
            .create(CreateCategoryParams {
                name,
                description: validate::optional_trimmed(params.description),
                status: params.status,
            })
            .await?;

        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<Paginated<Category>, AppError> {
        let filter = CategoryFilter {
            search: validate::optional_trimmed(filter.search),
            ..filter
        };

        Ok(CategoryRepository::new(self.db)
            .get_paginated(filter, page)
            .await?)
    }

    /// Applies a partial update, re-checking the name only when it changes.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The updated category
    /// - `Ok(None)` - No category with that ID
    /// - `Err(AppError::Duplicate)` - New name already used by another category
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, AppError> {
        let category_repo = CategoryRepository::new(self.db);

        let Some(existing) = category_repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let name = params
            .name
            .as_deref()
            .map(|name| validate::non_empty("Name", name))
            .transpose()?;
        if let Some(name) = &name {
            if *name != existing.name {
                self.ensure_name_available(name, Some(existing.id)).await?;
            }
        }

        let category = category_repo
            .update(UpdateCategoryParams {
                id: params.id,
                name,
                description: params.description.map(validate::optional_trimmed),
                status: params.status,
            })
            .await?;

        Ok(category)
    }

    /// Deletes a category that no transaction references.
    ///
    /// # Returns
    /// - `Ok(true)` - The category was deleted
    /// - `Ok(false)` - No category with that ID
    /// - `Err(AppError::Validation)` - Transactions still reference the category
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let category_repo = CategoryRepository::new(self.db);

        if category_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let transactions = TransactionRepository::new(self.db)
            .count_by_category(id)
            .await?;
        if transactions > 0 {
            return Err(AppError::Validation(
                "Cannot delete category with existing transactions".to_string(),
            ));
        }

        Ok(category_repo.delete(id).await?)
    }

    /// Fails if another category already uses `name` ignoring case.
    ///
    /// `current_id` is the category being renamed, which may keep its own name with
    /// different casing.
    async fn ensure_name_available(
        &self,
        name: &str,
        current_id: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = CategoryRepository::new(self.db)
            .find_by_name_ignore_case(name)
            .await?;

        match existing {
            Some(category) if Some(category.id) != current_id => Err(AppError::Duplicate(
                "Category with this name already exists".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
