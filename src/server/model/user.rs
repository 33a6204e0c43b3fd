//! User domain models and parameters.
//!
//! Provides the authenticated user model with role and status, and parameter types for
//! creating and updating users from the admin API.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::Status,
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
    },
    server::model::parse_status,
};

/// Application user with credentials, role, and account status.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lower-cased login email.
    pub email: String,
    pub name: String,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role or status is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = UserRole::parse(&entity.role)
            .ok_or_else(|| DbErr::Custom(format!("Unknown user role '{}'", entity.role)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            role,
            status: parse_status(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == UserRole::SuperAdmin
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Parameters for creating a user.
///
/// The password is plaintext here; the service validates and hashes it before it
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub status: Status,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
            role: dto.role.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
        }
    }
}

/// Parameters for a partial user update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<Status>,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            role: dto.role,
            status: dto.status,
            password: dto.password,
        }
    }
}
