//! Budget data repository.
//!
//! Budgets are always loaded together with their budget owner so listings can be ordered
//! by owner name and responses carry `budget_owner_name`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, SelectTwo,
};

use crate::server::model::{
    budget::{Budget, BudgetFilter, CreateBudgetParams, UpdateBudgetParams},
    pagination::{PageRequest, Paginated},
    scope::OwnerScope,
};

type BudgetWithOwner = SelectTwo<entity::budget::Entity, entity::budget_owner::Entity>;

pub struct BudgetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a budget and returns it with its owner's name.
    ///
    /// # Returns
    /// - `Ok(Budget)` - The created budget
    /// - `Err(DbErr)` - Database error, including the unique (owner, year) violation
    pub async fn create(&self, params: CreateBudgetParams) -> Result<Budget, DbErr> {
        let now = Utc::now();
        let entity = entity::budget::ActiveModel {
            budget_owner_id: ActiveValue::Set(params.budget_owner_id),
            year: ActiveValue::Set(params.year),
            amount_planned: ActiveValue::Set(params.amount_planned),
            amount_revised: ActiveValue::Set(params.amount_revised),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Budget with id {} not found after creation",
                entity.id
            )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Budget>, DbErr> {
        let result = entity::prelude::Budget::find_by_id(id)
            .find_also_related(entity::prelude::BudgetOwner)
            .one(self.db)
            .await?;

        Ok(result.map(|(budget, owner)| Budget::from_entity(budget, owner)))
    }

    /// Finds the budget for an owner in a year, used for the duplicate check.
    pub async fn find_by_owner_and_year(
        &self,
        budget_owner_id: i32,
        year: i32,
    ) -> Result<Option<Budget>, DbErr> {
        let result = entity::prelude::Budget::find()
            .filter(entity::budget::Column::BudgetOwnerId.eq(budget_owner_id))
            .filter(entity::budget::Column::Year.eq(year))
            .find_also_related(entity::prelude::BudgetOwner)
            .one(self.db)
            .await?;

        Ok(result.map(|(budget, owner)| Budget::from_entity(budget, owner)))
    }

    /// Gets every budget of an owner, newest year first.
    pub async fn find_by_owner(&self, budget_owner_id: i32) -> Result<Vec<Budget>, DbErr> {
        let results = entity::prelude::Budget::find()
            .filter(entity::budget::Column::BudgetOwnerId.eq(budget_owner_id))
            .find_also_related(entity::prelude::BudgetOwner)
            .order_by_desc(entity::budget::Column::Year)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(budget, owner)| Budget::from_entity(budget, owner))
            .collect())
    }

    /// Gets budgets visible in `scope` ordered by year descending, then owner name.
    ///
    /// # Arguments
    /// - `scope` - Owners the caller may see
    /// - `filter` - Optional year and owner filters
    /// - `page` - Requested page
    ///
    /// # Returns
    /// - `Ok(Paginated<Budget>)` - Budgets for the requested page and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: BudgetFilter,
        page: PageRequest,
    ) -> Result<Paginated<Budget>, DbErr> {
        let query = Self::filtered(scope, filter);

        let (results, total) = if page.paginate {
            let paginator = query.paginate(self.db, page.limit);
            let total = paginator.num_items().await?;
            (paginator.fetch_page(page.page_index()).await?, total)
        } else {
            let results = query.all(self.db).await?;
            let total = results.len() as u64;
            (results, total)
        };

        let budgets = results
            .into_iter()
            .map(|(budget, owner)| Budget::from_entity(budget, owner))
            .collect();

        Ok(Paginated::from_request(budgets, total, &page))
    }

    /// Gets every budget visible in `scope`, optionally for one year.
    pub async fn get_all(
        &self,
        scope: &OwnerScope,
        year: Option<i32>,
    ) -> Result<Vec<Budget>, DbErr> {
        let filter = BudgetFilter {
            year,
            budget_owner_id: None,
        };

        let results = Self::filtered(scope, filter).all(self.db).await?;

        Ok(results
            .into_iter()
            .map(|(budget, owner)| Budget::from_entity(budget, owner))
            .collect())
    }

    /// Counts budgets created by a user.
    pub async fn count_by_creator(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Budget::find()
            .filter(entity::budget::Column::CreatedBy.eq(user_id))
            .count(self.db)
            .await
    }

    /// Updates planned and revised amounts; returns `None` if the budget doesn't exist.
    pub async fn update(&self, params: UpdateBudgetParams) -> Result<Option<Budget>, DbErr> {
        let Some(entity) = entity::prelude::Budget::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(amount_planned) = params.amount_planned {
            active.amount_planned = ActiveValue::Set(amount_planned);
        }
        if let Some(amount_revised) = params.amount_revised {
            active.amount_revised = ActiveValue::Set(amount_revised);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        self.find_by_id(entity.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Budget::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn filtered(scope: &OwnerScope, filter: BudgetFilter) -> BudgetWithOwner {
        let mut query = entity::prelude::Budget::find();

        if let Some(ids) = scope.owner_ids() {
            query = query.filter(entity::budget::Column::BudgetOwnerId.is_in(ids.iter().copied()));
        }
        if let Some(year) = filter.year {
            query = query.filter(entity::budget::Column::Year.eq(year));
        }
        if let Some(budget_owner_id) = filter.budget_owner_id {
            query = query.filter(entity::budget::Column::BudgetOwnerId.eq(budget_owner_id));
        }

        query
            .find_also_related(entity::prelude::BudgetOwner)
            .order_by_desc(entity::budget::Column::Year)
            .order_by_asc(entity::budget_owner::Column::Name)
            .order_by_asc(entity::budget::Column::Id)
    }
}
