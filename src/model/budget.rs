use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BudgetDto {
    pub id: i32,
    pub budget_owner_id: i32,
    pub budget_owner_name: String,
    pub year: i32,
    pub amount_planned: f64,
    pub amount_revised: Option<f64>,
    pub amount_spent: f64,
    pub amount_remaining: f64,
    pub utilization_percentage: f64,
    pub transaction_count: u64,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateBudgetDto {
    pub budget_owner_id: i32,
    pub year: i32,
    pub amount_planned: f64,
    #[serde(default)]
    pub amount_revised: Option<f64>,
}

/// Amount update for an existing budget.
///
/// `amount_revised` distinguishes a missing field (leave unchanged) from an explicit
/// `null` (clear the revision).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateBudgetDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_planned: Option<f64>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<f64>))]
    pub amount_revised: Option<Option<f64>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BudgetSummaryDto {
    pub year: Option<i32>,
    pub total_planned: f64,
    /// Sum of effective amounts (revised if present, planned otherwise)
    pub total_revised: f64,
    pub total_spent: f64,
    pub total_remaining: f64,
    pub average_utilization: f64,
    pub budget_count: u64,
}
