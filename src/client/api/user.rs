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
        budget_owner::BudgetOwnerDto,
        user::{CreateUserDto, GrantAccessDto, UpdateUserDto, UserDto},
    },
};

pub async fn get_users(page: u64, limit: u64) -> Result<PaginatedDto<UserDto>, ApiError> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("limit", Some(limit.to_string())),
    ]);
    let request = get(&format!("/api/users{}", query));
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<UserDto, ApiError> {
    let request = post("/api/users").body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_user(id: i32, payload: UpdateUserDto) -> Result<UserDto, ApiError> {
    let url = format!("/api/users/{}", id);
    let request = patch(&url).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/users/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_user_access(id: i32) -> Result<Vec<BudgetOwnerDto>, ApiError> {
    let url = format!("/api/users/{}/access", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn grant_user_access(id: i32, budget_owner_id: i32) -> Result<BudgetOwnerDto, ApiError> {
    let url = format!("/api/users/{}/access", id);
    let request = post(&url).body(serialize_json(&GrantAccessDto { budget_owner_id })?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn revoke_user_access(id: i32, budget_owner_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/users/{}/access/{}", id, budget_owner_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
