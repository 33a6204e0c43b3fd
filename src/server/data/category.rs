//! Category data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        category::{Category, CategoryFilter, CreateCategoryParams, UpdateCategoryParams},
        pagination::{PageRequest, Paginated},
    },
    util::search::contains_pattern,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Category::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .map(Category::from_entity)
            .transpose()
    }

    /// Finds a category whose name equals `name` ignoring ASCII case.
    ///
    /// SQLite's `LOWER` only folds ASCII letters, so both sides fold the same way.
    pub async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<Category>, DbErr> {
        entity::prelude::Category::find()
            .filter(Expr::cust_with_values(
                "LOWER(\"name\") = LOWER(?)",
                [name.to_string()],
            ))
            .one(self.db)
            .await?
            .map(Category::from_entity)
            .transpose()
    }

    /// Gets categories ordered by name with optional status and search filters.
    pub async fn get_paginated(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<Paginated<Category>, DbErr> {
        let mut query = entity::prelude::Category::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::category::Column::Status.eq(status.as_str()));
        }
        if let Some(search) = filter.search {
            query = query.filter(entity::category::Column::Name.like(contains_pattern(&search)));
        }

        let query = query
            .order_by_asc(entity::category::Column::Name)
            .order_by_asc(entity::category::Column::Id);

        let (entities, total) = if page.paginate {
            let paginator = query.paginate(self.db, page.limit);
            let total = paginator.num_items().await?;
            (paginator.fetch_page(page.page_index()).await?, total)
        } else {
            let entities = query.all(self.db).await?;
            let total = entities.len() as u64;
            (entities, total)
        };

        let categories = entities
            .into_iter()
            .map(Category::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::from_request(categories, total, &page))
    }

    /// Gets the names of the given categories keyed by ID.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
    }

    /// Applies a partial update; returns `None` if the category doesn't exist.
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(entity) = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Category::from_entity(entity).map(Some)
    }

    /// Deletes a category.
    ///
    /// Fails with a foreign key error if transactions still reference it; the service
    /// checks for that first.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
