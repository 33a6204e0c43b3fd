use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{auth::LoginDto, user::UserDto},
};

pub async fn login(email: String, password: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let request = post("/api/auth/logout");
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

/// Fetch the logged in user, returning `None` when there is no valid session
pub async fn get_current_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/me");
    let response = send_request(request).await?;

    match parse_response(response).await {
        Ok(user) => Ok(Some(user)),
        Err(err) if err.is_unauthorized() => Ok(None),
        Err(err) => Err(err),
    }
}
