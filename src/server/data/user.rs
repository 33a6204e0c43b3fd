//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, lookups by email and admin existence checks with
//! conversion between entity models and domain models at the infrastructure boundary.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::model::{
        pagination::{PageRequest, Paginated},
        user::{CreateUserParams, UpdateUserParams, User},
    },
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Expects `params` to be validated and normalized already; the plaintext password in
    /// `params` is ignored in favor of `password_hash`.
    ///
    /// # Arguments
    /// - `params` - Validated user fields
    /// - `password_hash` - Argon2 PHC string for the password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        params: CreateUserParams,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email.
    ///
    /// Emails are stored lower-cased, so callers pass the normalized address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks if any super admin exists.
    ///
    /// Used during startup to decide whether the bootstrap admin should be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one super admin exists
    /// - `Ok(false)` - No super admin exists (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn super_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::SuperAdmin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the oldest super admin account.
    pub async fn find_first_super_admin(&self) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::SuperAdmin.as_str()))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets users ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Requested page; unpaginated requests return every user
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<User>, DbErr> {
        let query = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id);

        let (entities, total) = if page.paginate {
            let paginator = query.paginate(self.db, page.limit);
            let total = paginator.num_items().await?;
            (paginator.fetch_page(page.page_index()).await?, total)
        } else {
            let entities = query.all(self.db).await?;
            let total = entities.len() as u64;
            (entities, total)
        };

        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::from_request(users, total, &page))
    }

    /// Applies a partial update to a user.
    ///
    /// Only fields set in `params` are written. The password is written as the given hash.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        User::from_entity(entity).map(Some)
    }

    /// Deletes a user; access grants cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the display names of the given users keyed by ID.
    pub async fn names_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
    }
}
