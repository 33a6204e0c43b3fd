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
        api::{ErrorDto, PaginatedDto},
        budget::{BudgetDto, BudgetSummaryDto, CreateBudgetDto, UpdateBudgetDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            budget::{BudgetFilter, CreateBudgetParams, UpdateBudgetParams},
            pagination::{PageRequest, DEFAULT_LIMIT},
        },
        service::{budget::BudgetService, user_access::UserAccessService},
        state::AppState,
    },
};

/// Tag for grouping budget endpoints in OpenAPI documentation
pub static BUDGET_TAG: &str = "budget";

#[derive(Deserialize)]
pub struct BudgetListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub paginate: Option<bool>,
    pub year: Option<i32>,
    pub budget_owner_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct BudgetSummaryParams {
    pub year: Option<i32>,
}

/// Get budgets with utilization.
///
/// Budgets are limited to the current user's budget owners and ordered by year
/// descending, then owner name.
#[utoipa::path(
    get,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("paginate" = Option<bool>, Query, description = "Set to false to return every budget"),
        ("year" = Option<i32>, Query, description = "Filter by budget year"),
        ("budget_owner_id" = Option<i32>, Query, description = "Filter by budget owner")
    ),
    responses(
        (status = 200, description = "Successfully retrieved budgets", body = PaginatedDto<BudgetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budgets(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BudgetListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = BudgetService::new(&state.db);

    let page = PageRequest::from_query(params.page, params.limit, params.paginate, DEFAULT_LIMIT);
    let filter = BudgetFilter {
        year: params.year,
        budget_owner_id: params.budget_owner_id,
    };
    let budgets = service.get_paginated(&scope, filter, page).await?;

    Ok((StatusCode::OK, Json(budgets.into_dto(|b| b.into_dto()))))
}

/// Get aggregate totals across the current user's budgets.
#[utoipa::path(
    get,
    path = "/api/budgets/summary",
    tag = BUDGET_TAG,
    params(("year" = Option<i32>, Query, description = "Only include budgets of this year")),
    responses(
        (status = 200, description = "Budget totals", body = BudgetSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budget_summary(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BudgetSummaryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = BudgetService::new(&state.db);

    let summary = service.summary(&scope, params.year).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Create a budget for a budget owner and year.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can create budgets
///
/// # Returns
/// - `201 Created` - The created budget
/// - `400 Bad Request` - Year out of range or non-positive amounts
/// - `404 Not Found` - Budget owner not found
/// - `409 Conflict` - The owner already has a budget for that year
#[utoipa::path(
    post,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    request_body = CreateBudgetDto,
    responses(
        (status = 201, description = "Successfully created budget", body = BudgetDto),
        (status = 400, description = "Invalid budget data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Budget owner not found", body = ErrorDto),
        (status = 409, description = "Budget already exists for this owner and year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_budget(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetService::new(&state.db);

    let budget = service
        .create(CreateBudgetParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(budget.into_dto())))
}

/// Get a budget by ID with utilization.
#[utoipa::path(
    get,
    path = "/api/budgets/{id}",
    tag = BUDGET_TAG,
    params(("id" = i32, Path, description = "Budget ID")),
    responses(
        (status = 200, description = "Successfully retrieved budget", body = BudgetDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budget_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = BudgetService::new(&state.db);

    match service.get_by_id(id, &scope).await? {
        Some(budget) => Ok((StatusCode::OK, Json(budget.into_dto()))),
        None => Err(AppError::NotFound("Budget not found".to_string())),
    }
}

/// Update a budget's planned or revised amount.
///
/// `amount_revised: null` removes the revision.
#[utoipa::path(
    patch,
    path = "/api/budgets/{id}",
    tag = BUDGET_TAG,
    params(("id" = i32, Path, description = "Budget ID")),
    request_body = UpdateBudgetDto,
    responses(
        (status = 200, description = "Successfully updated budget", body = BudgetDto),
        (status = 400, description = "Invalid amounts", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_budget(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetService::new(&state.db);

    match service.update(UpdateBudgetParams::from_dto(id, payload)).await? {
        Some(budget) => Ok((StatusCode::OK, Json(budget.into_dto()))),
        None => Err(AppError::NotFound("Budget not found".to_string())),
    }
}

/// Delete a budget. Transactions are kept.
#[utoipa::path(
    delete,
    path = "/api/budgets/{id}",
    tag = BUDGET_TAG,
    params(("id" = i32, Path, description = "Budget ID")),
    responses(
        (status = 204, description = "Successfully deleted budget"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_budget(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BudgetService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Budget not found".to_string()))
    }
}
