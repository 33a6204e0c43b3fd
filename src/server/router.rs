//! API route table and OpenAPI document.

use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, PaginationMetaDto, Status},
        auth::LoginDto,
        budget::{BudgetDto, BudgetSummaryDto, CreateBudgetDto, UpdateBudgetDto},
        budget_owner::{BudgetOwnerDto, CreateBudgetOwnerDto, UpdateBudgetOwnerDto},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
        user::{CreateUserDto, GrantAccessDto, UpdateUserDto, UserDto, UserRole},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            budget::{self, BUDGET_TAG},
            budget_owner::{self, BUDGET_OWNER_TAG},
            category::{self, CATEGORY_TAG},
            health::{self, HEALTH_TAG},
            transaction::{self, TRANSACTION_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "DashFinance API", description = "Budget and expense tracking"),
    paths(
        health::health,
        auth::login,
        auth::logout,
        auth::me,
        user::get_users,
        user::create_user,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        user::get_user_access,
        user::grant_user_access,
        user::revoke_user_access,
        budget_owner::get_budget_owners,
        budget_owner::create_budget_owner,
        budget_owner::get_budget_owner_by_id,
        budget_owner::update_budget_owner,
        budget_owner::delete_budget_owner,
        category::get_categories,
        category::create_category,
        category::get_category_by_id,
        category::update_category,
        category::delete_category,
        budget::get_budgets,
        budget::get_budget_summary,
        budget::create_budget,
        budget::get_budget_by_id,
        budget::update_budget,
        budget::delete_budget,
        transaction::get_transactions,
        transaction::create_transaction,
        transaction::get_transaction_by_id,
        transaction::update_transaction,
        transaction::delete_transaction,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        PaginationMetaDto,
        Status,
        LoginDto,
        UserRole,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        GrantAccessDto,
        BudgetOwnerDto,
        CreateBudgetOwnerDto,
        UpdateBudgetOwnerDto,
        CategoryDto,
        CreateCategoryDto,
        UpdateCategoryDto,
        BudgetDto,
        BudgetSummaryDto,
        CreateBudgetDto,
        UpdateBudgetDto,
        TransactionDto,
        CreateTransactionDto,
        UpdateTransactionDto,
    )),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = AUTH_TAG, description = "Login and session"),
        (name = USER_TAG, description = "User administration and access grants"),
        (name = BUDGET_OWNER_TAG, description = "Budget owner master data"),
        (name = CATEGORY_TAG, description = "Category master data"),
        (name = BUDGET_TAG, description = "Annual budgets and utilization"),
        (name = TRANSACTION_TAG, description = "Spending records"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{id}/access",
            get(user::get_user_access).post(user::grant_user_access),
        )
        .route(
            "/api/users/{id}/access/{budget_owner_id}",
            delete(user::revoke_user_access),
        )
        .route(
            "/api/budget-owners",
            get(budget_owner::get_budget_owners).post(budget_owner::create_budget_owner),
        )
        .route(
            "/api/budget-owners/{id}",
            get(budget_owner::get_budget_owner_by_id)
                .put(budget_owner::update_budget_owner)
                .delete(budget_owner::delete_budget_owner),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(category::get_category_by_id)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/api/budgets",
            get(budget::get_budgets).post(budget::create_budget),
        )
        .route("/api/budgets/summary", get(budget::get_budget_summary))
        .route(
            "/api/budgets/{id}",
            get(budget::get_budget_by_id)
                .patch(budget::update_budget)
                .delete(budget::delete_budget),
        )
        .route(
            "/api/transactions",
            get(transaction::get_transactions).post(transaction::create_transaction),
        )
        .route(
            "/api/transactions/{id}",
            get(transaction::get_transaction_by_id)
                .patch(transaction::update_transaction)
                .delete(transaction::delete_transaction),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
