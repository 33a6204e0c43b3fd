use chrono::NaiveDate;

use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, patch, post, query_string,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    },
};

/// Filters for the transaction list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionQuery {
    pub budget_owner_id: Option<i32>,
    pub category_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
}

pub async fn get_transactions(
    page: u64,
    limit: u64,
    filter: TransactionQuery,
) -> Result<PaginatedDto<TransactionDto>, ApiError> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("limit", Some(limit.to_string())),
        ("budget_owner_id", filter.budget_owner_id.map(|id| id.to_string())),
        ("category_id", filter.category_id.map(|id| id.to_string())),
        ("start_date", filter.start_date.map(|d| d.to_string())),
        ("end_date", filter.end_date.map(|d| d.to_string())),
        ("year", filter.year.map(|y| y.to_string())),
    ]);
    let response = send_request(get(&format!("/api/transactions{}", query))).await?;
    parse_response(response).await
}

pub async fn create_transaction(payload: CreateTransactionDto) -> Result<TransactionDto, ApiError> {
    let request = post("/api/transactions").body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_transaction(
    id: i32,
    payload: UpdateTransactionDto,
) -> Result<TransactionDto, ApiError> {
    let url = format!("/api/transactions/{}", id);
    let request = patch(&url).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_transaction(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/transactions/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
