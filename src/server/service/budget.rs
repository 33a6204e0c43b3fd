//! Budget service with utilization.
//!
//! Every budget returned from this service carries its spending, aggregated from the
//! owner's transactions inside the budget year at the time of the request.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        budget::BudgetRepository, budget_owner::BudgetOwnerRepository,
        transaction::TransactionRepository,
    },
    error::AppError,
    model::{
        budget::{
            Budget, BudgetFilter, BudgetSummary, BudgetWithUtilization, CreateBudgetParams,
            UpdateBudgetParams,
        },
        pagination::{PageRequest, Paginated},
        scope::OwnerScope,
    },
    util::validate,
};

pub struct BudgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the budget of an owner for one year.
    ///
    /// # Returns
    /// - `Ok(BudgetWithUtilization)` - The created budget with current spending
    /// - `Err(AppError::Validation)` - Year out of range or non-positive amounts
    /// - `Err(AppError::NotFound)` - The budget owner doesn't exist
    /// - `Err(AppError::Duplicate)` - The owner already has a budget for that year
    pub async fn create(
        &self,
        params: CreateBudgetParams,
    ) -> Result<BudgetWithUtilization, AppError> {
        let budget_repo = BudgetRepository::new(self.db);

        let year = validate::budget_year(params.year)?;
        let amount_planned = validate::positive("Planned amount", params.amount_planned)?;
        let amount_revised = params
            .amount_revised
            .map(|amount| validate::positive("Revised amount", amount))
            .transpose()?;

        if BudgetOwnerRepository::new(self.db)
            .find_by_id(params.budget_owner_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Budget owner not found".to_string()));
        }

        if budget_repo
            .find_by_owner_and_year(params.budget_owner_id, year)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(
                "Budget already exists for this owner and year".to_string(),
            ));
        }

        let budget = budget_repo
            .create(CreateBudgetParams {
                year,
                amount_planned,
                amount_revised,
                ..params
            })
            .await?;

        self.with_utilization(budget).await
    }

    /// Gets a budget if it exists and its owner is visible in `scope`.
    pub async fn get_by_id(
        &self,
        id: i32,
        scope: &OwnerScope,
    ) -> Result<Option<BudgetWithUtilization>, AppError> {
        let Some(budget) = BudgetRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        if !scope.allows(budget.budget_owner_id) {
            return Ok(None);
        }

        Ok(Some(self.with_utilization(budget).await?))
    }

    /// Lists budgets visible in `scope`.
    ///
    /// Filtering by a single owner loads that owner's budgets through
    /// [`Self::find_by_owner`] and pages them in memory.
    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: BudgetFilter,
        page: PageRequest,
    ) -> Result<Paginated<BudgetWithUtilization>, AppError> {
        if let Some(budget_owner_id) = filter.budget_owner_id {
            let budgets = self
                .find_by_owner(budget_owner_id, scope)
                .await?
                .into_iter()
                .filter(|b| filter.year.is_none_or(|year| b.budget.year == year))
                .collect();

            return Ok(Paginated::from_vec(budgets, &page));
        }

        let budgets = BudgetRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?;

        let mut items = Vec::with_capacity(budgets.items.len());
        for budget in budgets.items {
            items.push(self.with_utilization(budget).await?);
        }

        Ok(Paginated {
            items,
            page: budgets.page,
            limit: budgets.limit,
            total: budgets.total,
        })
    }

    /// Gets an owner's budgets, newest year first; empty when the owner is out of scope.
    pub async fn find_by_owner(
        &self,
        budget_owner_id: i32,
        scope: &OwnerScope,
    ) -> Result<Vec<BudgetWithUtilization>, AppError> {
        if !scope.allows(budget_owner_id) {
            return Ok(Vec::new());
        }

        let budgets = BudgetRepository::new(self.db)
            .find_by_owner(budget_owner_id)
            .await?;

        let mut result = Vec::with_capacity(budgets.len());
        for budget in budgets {
            result.push(self.with_utilization(budget).await?);
        }

        Ok(result)
    }

    /// Aggregates every budget visible in `scope`, optionally for one year.
    pub async fn summary(
        &self,
        scope: &OwnerScope,
        year: Option<i32>,
    ) -> Result<BudgetSummary, AppError> {
        let budgets = BudgetRepository::new(self.db).get_all(scope, year).await?;

        let mut with_utilization = Vec::with_capacity(budgets.len());
        for budget in budgets {
            with_utilization.push(self.with_utilization(budget).await?);
        }

        Ok(BudgetSummary::from_budgets(year, &with_utilization))
    }

    /// Updates planned and revised amounts.
    ///
    /// # Returns
    /// - `Ok(Some(BudgetWithUtilization))` - The updated budget
    /// - `Ok(None)` - No budget with that ID
    /// - `Err(AppError::Validation)` - A non-positive amount
    pub async fn update(
        &self,
        params: UpdateBudgetParams,
    ) -> Result<Option<BudgetWithUtilization>, AppError> {
        let amount_planned = params
            .amount_planned
            .map(|amount| validate::positive("Planned amount", amount))
            .transpose()?;
        let amount_revised = match params.amount_revised {
            Some(Some(amount)) => Some(Some(validate::positive("Revised amount", amount)?)),
            other => other,
        };

        let budget = BudgetRepository::new(self.db)
            .update(UpdateBudgetParams {
                id: params.id,
                amount_planned,
                amount_revised,
            })
            .await?;

        match budget {
            Some(budget) => Ok(Some(self.with_utilization(budget).await?)),
            None => Ok(None),
        }
    }

    /// Deletes a budget; returns `false` if it didn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(BudgetRepository::new(self.db).delete(id).await?)
    }

    async fn with_utilization(&self, budget: Budget) -> Result<BudgetWithUtilization, AppError> {
        let totals = TransactionRepository::new(self.db)
            .totals_for_owner_year(budget.budget_owner_id, budget.year)
            .await?;

        Ok(BudgetWithUtilization::new(budget, totals))
    }
}
