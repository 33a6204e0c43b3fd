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
        budget_owner::{BudgetOwnerDto, CreateBudgetOwnerDto, UpdateBudgetOwnerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            budget_owner::{
                BudgetOwnerFilter, CreateBudgetOwnerParams, UpdateBudgetOwnerParams,
            },
            pagination::{PageRequest, DEFAULT_LIMIT},
        },
        service::{budget_owner::BudgetOwnerService, user_access::UserAccessService},
        state::AppState,
    },
};

/// Tag for grouping budget owner endpoints in OpenAPI documentation
pub static BUDGET_OWNER_TAG: &str = "budget-owner";

#[derive(Deserialize)]
pub struct BudgetOwnerListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub paginate: Option<bool>,
    pub status: Option<Status>,
    pub search: Option<String>,
}

/// Get budget owners visible to the current user.
///
/// Super admins see every owner; other users see the owners granted to them.
///
/// # Returns
/// - `200 OK` - Paginated owners ordered by name
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/budget-owners",
    tag = BUDGET_OWNER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("paginate" = Option<bool>, Query, description = "Set to false to return every owner"),
        ("status" = Option<Status>, Query, description = "Filter by status"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on name or code")
    ),
    responses(
        (status = 200, description = "Successfully retrieved budget owners", body = PaginatedDto<BudgetOwnerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budget_owners(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BudgetOwnerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = BudgetOwnerService::new(&state.db);

    let page = PageRequest::from_query(params.page, params.limit, params.paginate, DEFAULT_LIMIT);
    let filter = BudgetOwnerFilter {
        status: params.status,
        search: params.search,
    };
    let owners = service.get_paginated(&scope, filter, page).await?;

    Ok((StatusCode::OK, Json(owners.into_dto(|o| o.into_dto()))))
}

/// Create a budget owner.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can create budget owners
///
/// # Returns
/// - `201 Created` - The created owner
/// - `400 Bad Request` - Empty name
/// - `409 Conflict` - Name or code already in use
#[utoipa::path(
    post,
    path = "/api/budget-owners",
    tag = BUDGET_OWNER_TAG,
    request_body = CreateBudgetOwnerDto,
    responses(
        (status = 201, description = "Successfully created budget owner", body = BudgetOwnerDto),
        (status = 400, description = "Invalid budget owner data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 409, description = "Name or code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_budget_owner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBudgetOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetOwnerService::new(&state.db);

    let owner = service
        .create(CreateBudgetOwnerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(owner.into_dto())))
}

/// Get a budget owner by ID.
///
/// Owners outside the current user's scope are reported as not found.
#[utoipa::path(
    get,
    path = "/api/budget-owners/{id}",
    tag = BUDGET_OWNER_TAG,
    params(("id" = i32, Path, description = "Budget owner ID")),
    responses(
        (status = 200, description = "Successfully retrieved budget owner", body = BudgetOwnerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Budget owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budget_owner_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = BudgetOwnerService::new(&state.db);

    match service.get_by_id(id, &scope).await? {
        Some(owner) => Ok((StatusCode::OK, Json(owner.into_dto()))),
        None => Err(AppError::NotFound("Budget owner not found".to_string())),
    }
}

/// Update a budget owner.
///
/// Omitted fields are left unchanged; an empty `code` or `description` clears it.
#[utoipa::path(
    put,
    path = "/api/budget-owners/{id}",
    tag = BUDGET_OWNER_TAG,
    params(("id" = i32, Path, description = "Budget owner ID")),
    request_body = UpdateBudgetOwnerDto,
    responses(
        (status = 200, description = "Successfully updated budget owner", body = BudgetOwnerDto),
        (status = 400, description = "Invalid budget owner data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Budget owner not found", body = ErrorDto),
        (status = 409, description = "Name or code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_budget_owner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBudgetOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetOwnerService::new(&state.db);

    let params = UpdateBudgetOwnerParams::from_dto(id, payload);
    match service.update(params).await? {
        Some(owner) => Ok((StatusCode::OK, Json(owner.into_dto()))),
        None => Err(AppError::NotFound("Budget owner not found".to_string())),
    }
}

/// Delete a budget owner with its budgets, transactions and access grants.
#[utoipa::path(
    delete,
    path = "/api/budget-owners/{id}",
    tag = BUDGET_OWNER_TAG,
    params(("id" = i32, Path, description = "Budget owner ID")),
    responses(
        (status = 204, description = "Successfully deleted budget owner"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Budget owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_budget_owner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetOwnerService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Budget owner not found".to_string()))
    }
}
