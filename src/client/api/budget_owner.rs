use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, query_string,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        budget_owner::{BudgetOwnerDto, CreateBudgetOwnerDto, UpdateBudgetOwnerDto},
    },
};

pub async fn get_budget_owners(
    page: u64,
    limit: u64,
    search: Option<String>,
) -> Result<PaginatedDto<BudgetOwnerDto>, ApiError> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("limit", Some(limit.to_string())),
        ("search", search.filter(|s| !s.trim().is_empty())),
    ]);
    let response = send_request(get(&format!("/api/budget-owners{}", query))).await?;
    parse_response(response).await
}

/// Fetch every budget owner visible to the user, for dropdowns
pub async fn get_all_budget_owners() -> Result<Vec<BudgetOwnerDto>, ApiError> {
    let response = send_request(get("/api/budget-owners?paginate=false")).await?;
    parse_response::<PaginatedDto<BudgetOwnerDto>>(response)
        .await
        .map(|page| page.items)
}

pub async fn create_budget_owner(payload: CreateBudgetOwnerDto) -> Result<BudgetOwnerDto, ApiError> {
    let request = post("/api/budget-owners").body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_budget_owner(
    id: i32,
    payload: UpdateBudgetOwnerDto,
) -> Result<BudgetOwnerDto, ApiError> {
    let url = format!("/api/budget-owners/{}", id);
    let request = put(&url).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_budget_owner(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/budget-owners/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
