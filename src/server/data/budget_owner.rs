//! Budget owner data repository.
//!
//! Provides CRUD, name and code lookups for duplicate checks, and scoped listing with
//! status and search filters.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        budget_owner::{
            BudgetOwner, BudgetOwnerFilter, CreateBudgetOwnerParams, UpdateBudgetOwnerParams,
        },
        pagination::{PageRequest, Paginated},
        scope::OwnerScope,
    },
    util::search::contains_pattern,
};

pub struct BudgetOwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetOwnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new budget owner from validated parameters.
    pub async fn create(&self, params: CreateBudgetOwnerParams) -> Result<BudgetOwner, DbErr> {
        let now = Utc::now();
        let entity = entity::budget_owner::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BudgetOwner::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BudgetOwner>, DbErr> {
        entity::prelude::BudgetOwner::find_by_id(id)
            .one(self.db)
            .await?
            .map(BudgetOwner::from_entity)
            .transpose()
    }

    /// Finds an owner by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<BudgetOwner>, DbErr> {
        entity::prelude::BudgetOwner::find()
            .filter(entity::budget_owner::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(BudgetOwner::from_entity)
            .transpose()
    }

    /// Finds an owner by exact code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<BudgetOwner>, DbErr> {
        entity::prelude::BudgetOwner::find()
            .filter(entity::budget_owner::Column::Code.eq(code))
            .one(self.db)
            .await?
            .map(BudgetOwner::from_entity)
            .transpose()
    }

    /// Gets owners visible in `scope`, ordered by name.
    ///
    /// # Arguments
    /// - `scope` - Owners the caller may see
    /// - `filter` - Optional status and search filters; search matches name or code
    /// - `page` - Requested page
    ///
    /// # Returns
    /// - `Ok(Paginated<BudgetOwner>)` - Owners for the requested page and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: BudgetOwnerFilter,
        page: PageRequest,
    ) -> Result<Paginated<BudgetOwner>, DbErr> {
        let mut query = entity::prelude::BudgetOwner::find();

        if let Some(ids) = scope.owner_ids() {
            query = query.filter(entity::budget_owner::Column::Id.is_in(ids.iter().copied()));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::budget_owner::Column::Status.eq(status.as_str()));
        }
        if let Some(search) = filter.search {
            // SQLite LIKE is case-insensitive for ASCII
            query = query.filter(
                Condition::any()
                    .add(entity::budget_owner::Column::Name.like(contains_pattern(&search)))
                    .add(entity::budget_owner::Column::Code.like(contains_pattern(&search))),
            );
        }

        let query = query
            .order_by_asc(entity::budget_owner::Column::Name)
            .order_by_asc(entity::budget_owner::Column::Id);

        let (entities, total) = if page.paginate {
            let paginator = query.paginate(self.db, page.limit);
            let total = paginator.num_items().await?;
            (paginator.fetch_page(page.page_index()).await?, total)
        } else {
            let entities = query.all(self.db).await?;
            let total = entities.len() as u64;
            (entities, total)
        };

        let owners = entities
            .into_iter()
            .map(BudgetOwner::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::from_request(owners, total, &page))
    }

    /// Gets the names of the given owners keyed by ID.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let owners = entity::prelude::BudgetOwner::find()
            .filter(entity::budget_owner::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(owners.into_iter().map(|o| (o.id, o.name)).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(BudgetOwner))` - The updated owner
    /// - `Ok(None)` - No owner with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateBudgetOwnerParams,
    ) -> Result<Option<BudgetOwner>, DbErr> {
        let Some(entity) = entity::prelude::BudgetOwner::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(code) = params.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        BudgetOwner::from_entity(entity).map(Some)
    }

    /// Deletes an owner together with its budgets, transactions and access grants.
    ///
    /// # Returns
    /// - `Ok(true)` - The owner was deleted
    /// - `Ok(false)` - No owner with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BudgetOwner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
