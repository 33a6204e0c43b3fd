//! Transaction domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    server::error::AppError,
};

/// Upper bound on the number of IDs accepted by the `category_ids` filter.
pub const MAX_CATEGORY_IDS: usize = 50;

/// Spending record enriched with the names of its owner, category and creator.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub budget_owner_id: i32,
    pub budget_owner_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub description: String,
    pub receipt_url: Option<String>,
    pub created_by: i32,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Converts a transaction row at the repository boundary.
    ///
    /// Names are looked up separately in batch; missing names fall back to empty strings.
    pub fn from_entity(
        entity: entity::transaction::Model,
        budget_owner_name: Option<String>,
        category_name: Option<String>,
        created_by_name: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            budget_owner_id: entity.budget_owner_id,
            budget_owner_name: budget_owner_name.unwrap_or_default(),
            category_id: entity.category_id,
            category_name: category_name.unwrap_or_default(),
            date: entity.date,
            amount: entity.amount,
            description: entity.description,
            receipt_url: entity.receipt_url,
            created_by: entity.created_by,
            created_by_name: created_by_name.unwrap_or_default(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            budget_owner_id: self.budget_owner_id,
            budget_owner_name: self.budget_owner_name,
            category_id: self.category_id,
            category_name: self.category_name,
            date: self.date,
            amount: self.amount,
            description: self.description,
            receipt_url: self.receipt_url,
            created_by: self.created_by,
            created_by_name: self.created_by_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionParams {
    pub budget_owner_id: i32,
    pub category_id: i32,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub description: String,
    pub receipt_url: Option<String>,
    pub created_by: i32,
}

impl CreateTransactionParams {
    pub fn from_dto(dto: CreateTransactionDto, created_by: i32) -> Self {
        Self {
            budget_owner_id: dto.budget_owner_id,
            category_id: dto.category_id,
            date: dto.date,
            amount: dto.amount,
            description: dto.description,
            receipt_url: dto.receipt_url,
            created_by,
        }
    }
}

/// Partial update. For `receipt_url`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionParams {
    pub id: i32,
    pub budget_owner_id: Option<i32>,
    pub category_id: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub receipt_url: Option<Option<String>>,
}

impl UpdateTransactionParams {
    pub fn from_dto(id: i32, dto: UpdateTransactionDto) -> Self {
        Self {
            id,
            budget_owner_id: dto.budget_owner_id,
            category_id: dto.category_id,
            date: dto.date,
            amount: dto.amount,
            description: dto.description,
            receipt_url: dto
                .receipt_url
                .map(|u| Some(u).filter(|u| !u.trim().is_empty())),
        }
    }
}

/// Filters for listing transactions. Date bounds are inclusive calendar days (UTC).
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub budget_owner_id: Option<i32>,
    pub category_ids: Option<Vec<i32>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
}

impl TransactionFilter {
    /// Resolves the `category_id` and comma separated `category_ids` query values.
    ///
    /// # Returns
    /// - `Ok(None)` - No category filter
    /// - `Ok(Some(ids))` - Filter on any of `ids`
    /// - `Err(AppError::Validation)` - Both values given, an ID is not a number, or more
    ///   than [`MAX_CATEGORY_IDS`] IDs
    pub fn resolve_categories(
        category_id: Option<i32>,
        category_ids: Option<&str>,
    ) -> Result<Option<Vec<i32>>, AppError> {
        let category_ids = category_ids.map(str::trim).filter(|ids| !ids.is_empty());

        match (category_id, category_ids) {
            (Some(_), Some(_)) => Err(AppError::Validation(
                "category_id and category_ids cannot be combined".to_string(),
            )),
            (Some(id), None) => Ok(Some(vec![id])),
            (None, Some(raw)) => {
                let ids = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| {
                        id.parse::<i32>().map_err(|_| {
                            AppError::Validation(format!("Invalid category id '{}'", id))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                if ids.len() > MAX_CATEGORY_IDS {
                    return Err(AppError::Validation(format!(
                        "category_ids accepts at most {} ids",
                        MAX_CATEGORY_IDS
                    )));
                }

                Ok(Some(ids))
            }
            (None, None) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_category_becomes_list() {
        let ids = TransactionFilter::resolve_categories(Some(4), None).unwrap();
        assert_eq!(ids, Some(vec![4]));
    }

    #[test]
    fn parses_comma_separated_ids() {
        let ids = TransactionFilter::resolve_categories(None, Some("1, 2,3,")).unwrap();
        assert_eq!(ids, Some(vec![1, 2, 3]));

        let ids = TransactionFilter::resolve_categories(None, Some("  ")).unwrap();
        assert_eq!(ids, None);
    }

    #[test]
    fn rejects_combined_filters() {
        let result = TransactionFilter::resolve_categories(Some(1), Some("2,3"));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_invalid_and_too_many_ids() {
        assert!(TransactionFilter::resolve_categories(None, Some("1,x")).is_err());

        let many = (1..=51).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        assert!(TransactionFilter::resolve_categories(None, Some(&many)).is_err());

        let max = (1..=50).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(
            TransactionFilter::resolve_categories(None, Some(&max))
                .unwrap()
                .map(|ids| ids.len()),
            Some(50)
        );
    }
}
