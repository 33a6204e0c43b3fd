use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_body;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that has since been deleted.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user exists but has been deactivated.
    #[error("User {0} is inactive")]
    InactiveAccount(i32),

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so the response doesn't reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user tried to modify a record created by someone else.
    #[error("User {0} is not the creator: {1}")]
    NotCreator(i32, String),

    /// The user is logged in but lacks the role required by the endpoint.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InactiveAccount` → 401 with "Account is inactive"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `NotCreator` → 401 with a message naming the restriction
/// - `AccessDenied` → 403 with "You don't have permission to perform this action"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                error_body("UNAUTHORIZED", "Authentication required"),
            )
                .into_response(),
            Self::InactiveAccount(_) => (
                StatusCode::UNAUTHORIZED,
                error_body("UNAUTHORIZED", "Account is inactive"),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                error_body("UNAUTHORIZED", "Invalid email or password"),
            )
                .into_response(),
            Self::NotCreator(_, message) => {
                (StatusCode::UNAUTHORIZED, error_body("UNAUTHORIZED", message)).into_response()
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                error_body(
                    "FORBIDDEN",
                    "You don't have permission to perform this action",
                ),
            )
                .into_response(),
        }
    }
}
