use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, AppError},
};

/// Splits a response into its status and decoded `ErrorDto` body.
async fn status_and_body(response: Response) -> (StatusCode, ErrorDto) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

/// Tests the status and code of each request-level error kind.
///
/// Expected: 400 VALIDATION_ERROR, 404 NOT_FOUND, 409 DUPLICATE with the message kept
#[tokio::test]
async fn maps_request_errors_to_client_statuses() {
    let cases = [
        (
            AppError::Validation("Name is required".to_string()),
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        ),
        (
            AppError::NotFound("Budget not found".to_string()),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
        ),
        (
            AppError::Duplicate("Category with this name already exists".to_string()),
            StatusCode::CONFLICT,
            "DUPLICATE",
        ),
    ];

    for (err, expected_status, expected_code) in cases {
        let message = err.to_string();
        let (status, body) = status_and_body(err.into_response()).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.code, expected_code);
        assert_eq!(body.error, message);
    }
}

/// Tests the status and code of authentication and authorization failures.
///
/// Expected: 401 UNAUTHORIZED for session, credential and creator failures,
/// 403 FORBIDDEN for a missing role
#[tokio::test]
async fn maps_auth_errors_to_401_and_403() {
    let cases = [
        (AuthError::UserNotInSession, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (AuthError::UserNotInDatabase(3), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (AuthError::InactiveAccount(3), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (
            AuthError::NotCreator(3, "Only the creator can edit this transaction".to_string()),
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
        ),
        (
            AuthError::AccessDenied(3, "requires super admin".to_string()),
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
        ),
    ];

    for (err, expected_status, expected_code) in cases {
        let (status, body) = status_and_body(AppError::from(err).into_response()).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.code, expected_code);
    }
}

/// Tests that server-side failures hide their details.
///
/// Expected: 500 INTERNAL_ERROR with a generic message
#[tokio::test]
async fn maps_other_errors_to_internal_error() {
    let err = AppError::DbErr(sea_orm::DbErr::Custom("connection reset".to_string()));

    let (status, body) = status_and_body(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.code, "INTERNAL_ERROR");
    assert!(!body.error.contains("connection reset"));
}

/// Tests a unique index violation raised by the database.
///
/// Expected: 409 DUPLICATE rather than 500
#[tokio::test]
async fn maps_unique_violation_to_duplicate() {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .unwrap();
    let err = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .unwrap_err();

    let (status, body) = status_and_body(AppError::from(err).into_response()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.code, "DUPLICATE");
}
