use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, Status},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            category::{CategoryFilter, CreateCategoryParams, UpdateCategoryParams},
            pagination::{PageRequest, DEFAULT_LIMIT},
        },
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

#[derive(Deserialize)]
pub struct CategoryListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub paginate: Option<bool>,
    pub status: Option<Status>,
    pub search: Option<String>,
}

/// Get categories.
///
/// Categories are master data shared by every budget owner, so any logged-in user can
/// list them.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("paginate" = Option<bool>, Query, description = "Set to false to return every category"),
        ("status" = Option<Status>, Query, description = "Filter by status"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved categories", body = PaginatedDto<CategoryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    let page = PageRequest::from_query(params.page, params.limit, params.paginate, DEFAULT_LIMIT);
    let filter = CategoryFilter {
        status: params.status,
        search: params.search,
    };
    let categories = service.get_paginated(filter, page).await?;

    Ok((StatusCode::OK, Json(categories.into_dto(|c| c.into_dto()))))
}

/// Create a category.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can create categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = CategoryService::new(&state.db);

    let category = service.create(CreateCategoryParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CategoryService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Update a category.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = CategoryService::new(&state.db);

    match service.update(UpdateCategoryParams::from_dto(id, payload)).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category.
///
/// Rejected while any transaction references the category.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 400, description = "Category has transactions", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = CategoryService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Category not found".to_string()))
    }
}
