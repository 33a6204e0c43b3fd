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
        budget_owner::BudgetOwnerDto,
        user::{CreateUserDto, GrantAccessDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            budget_owner::BudgetOwner,
            pagination::{PageRequest, DEFAULT_LIMIT},
            user::{CreateUserParams, UpdateUserParams},
        },
        service::{user::UserService, user_access::UserAccessService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct UserListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub paginate: Option<bool>,
}

/// Get paginated users.
///
/// Users are ordered by name. Only accessible by super admins.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can list users
///
/// # Returns
/// - `200 OK` - Paginated users
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a super admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("paginate" = Option<bool>, Query, description = "Set to false to return every user")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserService::new(&state.db);

    let page = PageRequest::from_query(params.page, params.limit, params.paginate, DEFAULT_LIMIT);
    let users = service.get_paginated(page).await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// Create a user.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can create users
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid email, name or password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.create(CreateUserParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Update a user's name, role, status or password.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid data, or an admin demoting or deactivating themselves
/// - `404 Not Found` - User not found
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserService::new(&state.db);

    let params = UpdateUserParams::from_dto(id, payload);
    match service.update(params, current_user.id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete a user.
///
/// Admins cannot delete themselves, and users who created budgets or transactions can
/// only be deactivated.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Cannot delete this user", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserService::new(&state.db);

    if service.delete(id, current_user.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

/// Get the budget owners a user has been granted access to.
#[utoipa::path(
    get,
    path = "/api/users/{id}/access",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Granted budget owners", body = Vec<BudgetOwnerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_access(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserAccessService::new(&state.db);

    let Some(owners) = service.list(id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    let owners: Vec<BudgetOwnerDto> = owners.into_iter().map(BudgetOwner::into_dto).collect();

    Ok((StatusCode::OK, Json(owners)))
}

/// Grant a user access to a budget owner.
#[utoipa::path(
    post,
    path = "/api/users/{id}/access",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = GrantAccessDto,
    responses(
        (status = 201, description = "Access granted", body = BudgetOwnerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User or budget owner not found", body = ErrorDto),
        (status = 409, description = "Access already granted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn grant_user_access(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<GrantAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserAccessService::new(&state.db);

    let owner = service.grant(id, payload.budget_owner_id).await?;

    Ok((StatusCode::CREATED, Json(owner.into_dto())))
}

/// Revoke a user's access to a budget owner.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/access/{budget_owner_id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("budget_owner_id" = i32, Path, description = "Budget owner ID")
    ),
    responses(
        (status = 204, description = "Access revoked"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "Access grant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_user_access(
    State(state): State<AppState>,
    session: Session,
    Path((id, budget_owner_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = UserAccessService::new(&state.db);

    if service.revoke(id, budget_owner_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Access grant not found".to_string()))
    }
}
