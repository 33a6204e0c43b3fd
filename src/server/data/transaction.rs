//! Transaction data repository.
//!
//! Transactions are returned enriched with the names of their budget owner, category and
//! creator. Names are batch-loaded per page with `IN` queries rather than joined, keeping
//! pagination on the transaction table alone.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{budget_owner::BudgetOwnerRepository, category::CategoryRepository, user::UserRepository},
    model::{
        budget::SpendTotals,
        pagination::{PageRequest, Paginated},
        scope::OwnerScope,
        transaction::{
            CreateTransactionParams, Transaction, TransactionFilter, UpdateTransactionParams,
        },
    },
    util::date::{day_end_exclusive, day_start, year_range},
};

pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a transaction and returns it with related names.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The created transaction
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown
    ///   owner, category or creator
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, DbErr> {
        let now = Utc::now();
        let entity = entity::transaction::ActiveModel {
            budget_owner_id: ActiveValue::Set(params.budget_owner_id),
            category_id: ActiveValue::Set(params.category_id),
            date: ActiveValue::Set(params.date),
            amount: ActiveValue::Set(params.amount),
            description: ActiveValue::Set(params.description),
            receipt_url: ActiveValue::Set(params.receipt_url),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut transactions = self.with_names(vec![entity]).await?;
        transactions.pop().ok_or(DbErr::RecordNotFound(
            "Transaction not found after creation".to_string(),
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, DbErr> {
        let Some(entity) = entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![entity]).await?.pop())
    }

    /// Gets transactions visible in `scope`, newest first.
    ///
    /// # Arguments
    /// - `scope` - Owners the caller may see
    /// - `filter` - Owner, category, date range and year filters
    /// - `page` - Requested page
    ///
    /// # Returns
    /// - `Ok(Paginated<Transaction>)` - Transactions for the page and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        scope: &OwnerScope,
        filter: TransactionFilter,
        page: PageRequest,
    ) -> Result<Paginated<Transaction>, DbErr> {
        let query = Self::filtered(scope, filter)?
            .order_by_desc(entity::transaction::Column::Date)
            .order_by_desc(entity::transaction::Column::Id);

        let (entities, total) = if page.paginate {
            let paginator = query.paginate(self.db, page.limit);
            let total = paginator.num_items().await?;
            (paginator.fetch_page(page.page_index()).await?, total)
        } else {
            let entities = query.all(self.db).await?;
            let total = entities.len() as u64;
            (entities, total)
        };

        let transactions = self.with_names(entities).await?;

        Ok(Paginated::from_request(transactions, total, &page))
    }

    /// Sums the owner's transaction amounts within the calendar year.
    ///
    /// # Returns
    /// - `Ok(SpendTotals)` - Amount spent and number of transactions (zero when none)
    /// - `Err(DbErr)` - Database error, or a year outside the supported date range
    pub async fn totals_for_owner_year(
        &self,
        budget_owner_id: i32,
        year: i32,
    ) -> Result<SpendTotals, DbErr> {
        let (start, end) = year_range(year)
            .ok_or_else(|| DbErr::Custom(format!("Year {} is out of range", year)))?;

        let totals: Option<(Option<f64>, i64)> = entity::prelude::Transaction::find()
            .select_only()
            .column_as(entity::transaction::Column::Amount.sum(), "spent")
            .column_as(entity::transaction::Column::Id.count(), "transaction_count")
            .filter(entity::transaction::Column::BudgetOwnerId.eq(budget_owner_id))
            .filter(entity::transaction::Column::Date.gte(start))
            .filter(entity::transaction::Column::Date.lt(end))
            .into_tuple()
            .one(self.db)
            .await?;

        let (spent, count) = totals.unwrap_or((None, 0));

        Ok(SpendTotals {
            spent: spent.unwrap_or(0.0),
            transaction_count: count.max(0) as u64,
        })
    }

    /// Counts transactions referencing a category.
    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Counts transactions created by a user.
    pub async fn count_by_creator(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::CreatedBy.eq(user_id))
            .count(self.db)
            .await
    }

    /// Applies a partial update; returns `None` if the transaction doesn't exist.
    pub async fn update(
        &self,
        params: UpdateTransactionParams,
    ) -> Result<Option<Transaction>, DbErr> {
        let Some(entity) = entity::prelude::Transaction::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(budget_owner_id) = params.budget_owner_id {
            active.budget_owner_id = ActiveValue::Set(budget_owner_id);
        }
        if let Some(category_id) = params.category_id {
            active.category_id = ActiveValue::Set(category_id);
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(amount) = params.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(receipt_url) = params.receipt_url {
            active.receipt_url = ActiveValue::Set(receipt_url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(self.with_names(vec![entity]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Builds the filtered select shared by listing queries.
    fn filtered(
        scope: &OwnerScope,
        filter: TransactionFilter,
    ) -> Result<Select<entity::transaction::Entity>, DbErr> {
        let mut query = entity::prelude::Transaction::find();

        if let Some(ids) = scope.owner_ids() {
            query =
                query.filter(entity::transaction::Column::BudgetOwnerId.is_in(ids.iter().copied()));
        }
        if let Some(budget_owner_id) = filter.budget_owner_id {
            query = query.filter(entity::transaction::Column::BudgetOwnerId.eq(budget_owner_id));
        }
        if let Some(category_ids) = filter.category_ids {
            query = query.filter(entity::transaction::Column::CategoryId.is_in(category_ids));
        }
        if let Some(start_date) = filter.start_date {
            query = query.filter(entity::transaction::Column::Date.gte(day_start(start_date)));
        }
        if let Some(end_date) = filter.end_date {
            let end = day_end_exclusive(end_date)
                .ok_or_else(|| DbErr::Custom(format!("Date {} is out of range", end_date)))?;
            query = query.filter(entity::transaction::Column::Date.lt(end));
        }
        if let Some(year) = filter.year {
            let (start, end) = year_range(year)
                .ok_or_else(|| DbErr::Custom(format!("Year {} is out of range", year)))?;
            query = query
                .filter(entity::transaction::Column::Date.gte(start))
                .filter(entity::transaction::Column::Date.lt(end));
        }

        Ok(query)
    }

    /// Converts transaction rows to domain models with owner, category and creator names.
    async fn with_names(
        &self,
        entities: Vec<entity::transaction::Model>,
    ) -> Result<Vec<Transaction>, DbErr> {
        let owner_ids = entities.iter().map(|t| t.budget_owner_id).collect();
        let category_ids = entities.iter().map(|t| t.category_id).collect();
        let user_ids = entities.iter().map(|t| t.created_by).collect();

        let owner_names = BudgetOwnerRepository::new(self.db)
            .names_by_ids(owner_ids)
            .await?;
        let category_names = CategoryRepository::new(self.db)
            .names_by_ids(category_ids)
            .await?;
        let user_names = UserRepository::new(self.db).names_by_ids(user_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let owner_name = owner_names.get(&entity.budget_owner_id).cloned();
                let category_name = category_names.get(&entity.category_id).cloned();
                let created_by_name = user_names.get(&entity.created_by).cloned();
                Transaction::from_entity(entity, owner_name, category_name, created_by_name)
            })
            .collect())
    }
}
