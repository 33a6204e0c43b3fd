use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::{PageRequest, DEFAULT_TRANSACTION_LIMIT},
            transaction::{CreateTransactionParams, TransactionFilter, UpdateTransactionParams},
        },
        service::{transaction::TransactionService, user_access::UserAccessService},
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

#[derive(Deserialize)]
pub struct TransactionListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub budget_owner_id: Option<i32>,
    pub category_id: Option<i32>,
    /// Comma separated category IDs.
    pub category_ids: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
}

/// Get transactions visible to the current user.
///
/// Ordered by date, newest first.
///
/// # Returns
/// - `200 OK` - Paginated transactions
/// - `400 Bad Request` - Conflicting or malformed category filters, or an inverted date range
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("budget_owner_id" = Option<i32>, Query, description = "Filter by budget owner"),
        ("category_id" = Option<i32>, Query, description = "Filter by one category"),
        ("category_ids" = Option<String>, Query, description = "Comma separated category IDs (max 50), not combinable with category_id"),
        ("start_date" = Option<NaiveDate>, Query, description = "First day to include (YYYY-MM-DD)"),
        ("end_date" = Option<NaiveDate>, Query, description = "Last day to include (YYYY-MM-DD)"),
        ("year" = Option<i32>, Query, description = "Filter by calendar year")
    ),
    responses(
        (status = 200, description = "Successfully retrieved transactions", body = PaginatedDto<TransactionDto>),
        (status = 400, description = "Invalid filters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TransactionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = TransactionService::new(&state.db);

    let category_ids = TransactionFilter::resolve_categories(
        params.category_id,
        params.category_ids.as_deref(),
    )?;
    let filter = TransactionFilter {
        budget_owner_id: params.budget_owner_id,
        category_ids,
        start_date: params.start_date,
        end_date: params.end_date,
        year: params.year,
    };
    let page = PageRequest::new(params.page, params.limit, DEFAULT_TRANSACTION_LIMIT);

    let transactions = service.get_paginated(&scope, filter, page).await?;

    Ok((StatusCode::OK, Json(transactions.into_dto(|t| t.into_dto()))))
}

/// Record a transaction.
///
/// The budget owner must be visible to the current user. The current user becomes the
/// creator.
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully created transaction", body = TransactionDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Budget owner or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = TransactionService::new(&state.db);

    let params = CreateTransactionParams::from_dto(payload, user.id);
    let transaction = service.create(params, &scope).await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Get a transaction by ID.
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Successfully retrieved transaction", body = TransactionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = TransactionService::new(&state.db);

    match service.get_by_id(id, &scope).await? {
        Some(transaction) => Ok((StatusCode::OK, Json(transaction.into_dto()))),
        None => Err(AppError::NotFound("Transaction not found".to_string())),
    }
}

/// Update a transaction.
///
/// # Access Control
/// - Creator of the transaction or a super admin
#[utoipa::path(
    patch,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = i32, Path, description = "Transaction ID")),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Successfully updated transaction", body = TransactionDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 401, description = "Not authenticated, or not the creator", body = ErrorDto),
        (status = 404, description = "Transaction, budget owner or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = TransactionService::new(&state.db);

    let params = UpdateTransactionParams::from_dto(id, payload);
    match service.update(params, &user, &scope).await? {
        Some(transaction) => Ok((StatusCode::OK, Json(transaction.into_dto()))),
        None => Err(AppError::NotFound("Transaction not found".to_string())),
    }
}

/// Delete a transaction.
///
/// # Access Control
/// - Creator of the transaction or a super admin
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Successfully deleted transaction"),
        (status = 401, description = "Not authenticated, or not the creator", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = UserAccessService::new(&state.db).scope_for(&user).await?;

    let service = TransactionService::new(&state.db);

    if service.delete(id, &user, &scope).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Transaction not found".to_string()))
    }
}
