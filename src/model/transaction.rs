use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TransactionDto {
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

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateTransactionDto {
    pub budget_owner_id: i32,
    pub category_id: i32,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub receipt_url: Option<String>,
}

/// Partial update; an empty `receipt_url` clears the field.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateTransactionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_owner_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}
