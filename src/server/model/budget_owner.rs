//! Budget owner domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::Status,
        budget_owner::{BudgetOwnerDto, CreateBudgetOwnerDto, UpdateBudgetOwnerDto},
    },
    server::model::parse_status,
};

/// Organizational unit that budgets and transactions are attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOwner {
    pub id: i32,
    pub name: String,
    /// Optional short code such as `IT`, unique when present.
    pub code: Option<String>,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetOwner {
    pub fn from_entity(entity: entity::budget_owner::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            description: entity.description,
            status: parse_status(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BudgetOwnerDto {
        BudgetOwnerDto {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBudgetOwnerParams {
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub status: Status,
}

impl CreateBudgetOwnerParams {
    pub fn from_dto(dto: CreateBudgetOwnerDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
            description: dto.description,
            status: dto.status.unwrap_or_default(),
        }
    }
}

/// Partial update. For `code` and `description`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetOwnerParams {
    pub id: i32,
    pub name: Option<String>,
    pub code: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub status: Option<Status>,
}

impl UpdateBudgetOwnerParams {
    /// Maps the DTO's "empty string clears" convention onto explicit clears.
    pub fn from_dto(id: i32, dto: UpdateBudgetOwnerDto) -> Self {
        Self {
            id,
            name: dto.name,
            code: dto.code.map(|c| Some(c).filter(|c| !c.trim().is_empty())),
            description: dto
                .description
                .map(|d| Some(d).filter(|d| !d.trim().is_empty())),
            status: dto.status,
        }
    }
}

/// Filters for listing budget owners.
#[derive(Debug, Clone, Default)]
pub struct BudgetOwnerFilter {
    pub status: Option<Status>,
    /// Case-insensitive substring match on name or code.
    pub search: Option<String>,
}
