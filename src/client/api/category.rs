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
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
};

pub async fn get_categories(
    page: u64,
    limit: u64,
    search: Option<String>,
) -> Result<PaginatedDto<CategoryDto>, ApiError> {
    let query = query_string(&[
        ("page", Some(page.to_string())),
        ("limit", Some(limit.to_string())),
        ("search", search.filter(|s| !s.trim().is_empty())),
    ]);
    let response = send_request(get(&format!("/api/categories{}", query))).await?;
    parse_response(response).await
}

/// Fetch every active category, for dropdowns
pub async fn get_active_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/api/categories?paginate=false&status=ACTIVE")).await?;
    parse_response::<PaginatedDto<CategoryDto>>(response)
        .await
        .map(|page| page.items)
}

pub async fn create_category(payload: CreateCategoryDto) -> Result<CategoryDto, ApiError> {
    let request = post("/api/categories").body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_category(id: i32, payload: UpdateCategoryDto) -> Result<CategoryDto, ApiError> {
    let url = format!("/api/categories/{}", id);
    let request = put(&url).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_category(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/categories/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
