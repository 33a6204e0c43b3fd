//! Category domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::Status,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::model::parse_status,
};

/// Expense category referenced by transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: parse_status(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status.unwrap_or_default(),
        }
    }
}

/// Partial update. For `description`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<Status>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto
                .description
                .map(|d| Some(d).filter(|d| !d.trim().is_empty())),
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub status: Option<Status>,
    /// Case-insensitive substring match on name.
    pub search: Option<String>,
}
