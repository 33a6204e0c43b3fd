use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::model::error::ApiError, model::api::ErrorDto};

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

/// Build an `ApiError` from a non-2xx response, preferring the server's `ErrorDto` message
async fn error_from(response: Response) -> ApiError {
    let status = response.status() as u64;
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorDto>(&body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body,
    };

    ApiError::new(status, message)
}

/// Parse a JSON success body into `T`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !is_success(&response) {
        return Err(error_from(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
}

/// Accept any 2xx response without reading the body (204 No Content and friends)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if is_success(&response) {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Session cookies ride along on every request
fn with_session(request: Request) -> Request {
    request.credentials(RequestCredentials::Include)
}

fn with_json(request: Request) -> Request {
    with_session(request).header("Content-Type", "application/json")
}

pub fn get(url: &str) -> Request {
    with_session(Request::get(url))
}

pub fn post(url: &str) -> Request {
    with_json(Request::post(url))
}

pub fn put(url: &str) -> Request {
    with_json(Request::put(url))
}

pub fn patch(url: &str) -> Request {
    with_json(Request::patch(url))
}

pub fn delete(url: &str) -> Request {
    with_session(Request::delete(url))
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}

/// Build a query string from optional parameters, skipping the ones that are `None`
pub fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| format!("{}={}", key, urlencoding::encode(value)))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
