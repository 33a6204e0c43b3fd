//! Budget domain models and parameters.
//!
//! A budget row only stores planned and revised amounts. Spending is aggregated from
//! transactions on read and combined with the amounts into a [`Utilization`], so the
//! values reported to clients always reflect the current transactions.

use chrono::{DateTime, Utc};

use crate::{
    model::budget::{BudgetDto, BudgetSummaryDto, CreateBudgetDto, UpdateBudgetDto},
    server::util::amount::{round2, Utilization},
};

/// Annual budget joined with its owner's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub budget_owner_id: i32,
    pub budget_owner_name: String,
    pub year: i32,
    pub amount_planned: f64,
    pub amount_revised: Option<f64>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Converts a budget row and its owner row at the repository boundary.
    ///
    /// The owner is always present because `budget_owner_id` is a non-null foreign key;
    /// a missing owner only happens if the row was deleted mid-query, in which case the
    /// name is left empty.
    pub fn from_entity(
        entity: entity::budget::Model,
        owner: Option<entity::budget_owner::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            budget_owner_id: entity.budget_owner_id,
            budget_owner_name: owner.map(|o| o.name).unwrap_or_default(),
            year: entity.year,
            amount_planned: entity.amount_planned,
            amount_revised: entity.amount_revised,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Transaction totals for one owner within one budget year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpendTotals {
    pub spent: f64,
    pub transaction_count: u64,
}

/// Budget with spending aggregated from its owner's transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetWithUtilization {
    pub budget: Budget,
    pub utilization: Utilization,
    pub transaction_count: u64,
}

impl BudgetWithUtilization {
    pub fn new(budget: Budget, totals: SpendTotals) -> Self {
        let utilization =
            Utilization::calculate(budget.amount_planned, budget.amount_revised, totals.spent);

        Self {
            budget,
            utilization,
            transaction_count: totals.transaction_count,
        }
    }

    pub fn into_dto(self) -> BudgetDto {
        BudgetDto {
            id: self.budget.id,
            budget_owner_id: self.budget.budget_owner_id,
            budget_owner_name: self.budget.budget_owner_name,
            year: self.budget.year,
            amount_planned: self.budget.amount_planned,
            amount_revised: self.budget.amount_revised,
            amount_spent: self.utilization.spent,
            amount_remaining: self.utilization.remaining,
            utilization_percentage: self.utilization.percentage,
            transaction_count: self.transaction_count,
            created_by: self.budget.created_by,
            created_at: self.budget.created_at,
            updated_at: self.budget.updated_at,
        }
    }
}

/// Totals across a set of budgets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetSummary {
    pub year: Option<i32>,
    pub total_planned: f64,
    pub total_effective: f64,
    pub total_spent: f64,
    pub total_remaining: f64,
    pub average_utilization: f64,
    pub budget_count: u64,
}

impl BudgetSummary {
    /// Sums amounts and averages the per-budget utilization percentages.
    pub fn from_budgets(year: Option<i32>, budgets: &[BudgetWithUtilization]) -> Self {
        let mut summary = Self {
            year,
            budget_count: budgets.len() as u64,
            ..Default::default()
        };

        for budget in budgets {
            summary.total_planned += budget.budget.amount_planned;
            summary.total_effective += budget.utilization.effective_amount;
            summary.total_spent += budget.utilization.spent;
            summary.total_remaining += budget.utilization.remaining;
        }

        if !budgets.is_empty() {
            let total_percentage: f64 = budgets.iter().map(|b| b.utilization.percentage).sum();
            summary.average_utilization = round2(total_percentage / budgets.len() as f64);
        }

        summary
    }

    pub fn into_dto(self) -> BudgetSummaryDto {
        BudgetSummaryDto {
            year: self.year,
            total_planned: self.total_planned,
            total_revised: self.total_effective,
            total_spent: self.total_spent,
            total_remaining: self.total_remaining,
            average_utilization: self.average_utilization,
            budget_count: self.budget_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBudgetParams {
    pub budget_owner_id: i32,
    pub year: i32,
    pub amount_planned: f64,
    pub amount_revised: Option<f64>,
    pub created_by: i32,
}

impl CreateBudgetParams {
    pub fn from_dto(dto: CreateBudgetDto, created_by: i32) -> Self {
        Self {
            budget_owner_id: dto.budget_owner_id,
            year: dto.year,
            amount_planned: dto.amount_planned,
            amount_revised: dto.amount_revised,
            created_by,
        }
    }
}

/// Amount update. `amount_revised: Some(None)` clears the revision.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetParams {
    pub id: i32,
    pub amount_planned: Option<f64>,
    pub amount_revised: Option<Option<f64>>,
}

impl UpdateBudgetParams {
    pub fn from_dto(id: i32, dto: UpdateBudgetDto) -> Self {
        Self {
            id,
            amount_planned: dto.amount_planned,
            amount_revised: dto.amount_revised,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetFilter {
    pub year: Option<i32>,
    pub budget_owner_id: Option<i32>,
}
