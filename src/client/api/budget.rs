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
        budget::{BudgetDto, BudgetSummaryDto, CreateBudgetDto, UpdateBudgetDto},
    },
};

pub async fn get_budgets(
    page: u64,
    limit: u64,
    year: Option<i32>,
    budget_owner_id: Option<i32>,
) -> Result<PaginatedDto<BudgetDto>, ApiError> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("limit", Some(limit.to_string())),
        ("year", year.map(|y| y.to_string())),
        ("budget_owner_id", budget_owner_id.map(|id| id.to_string())),
    ]);
    let response = send_request(get(&format!("/api/budgets{}", query))).await?;
    parse_response(response).await
}

pub async fn get_budget_summary(year: Option<i32>) -> Result<BudgetSummaryDto, ApiError> {
    let query = query_string(&[("year", year.map(|y| y.to_string()))]);
    let response = send_request(get(&format!("/api/budgets/summary{}", query))).await?;
    parse_response(response).await
}

pub async fn create_budget(payload: CreateBudgetDto) -> Result<BudgetDto, ApiError> {
    let request = post("/api/budgets").body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_budget(id: i32, payload: UpdateBudgetDto) -> Result<BudgetDto, ApiError> {
    let url = format!("/api/budgets/{}", id);
    let request = patch(&url).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_budget(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/budgets/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
