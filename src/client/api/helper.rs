use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::model::error::ApiError;

/// Parses a JSON response body, turning non-2xx responses into `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if response.ok() {
        response.json::<T>().await.map_err(|e| ApiError {
            status,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_body(status, &body))
    }
}

fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Create a GET request carrying the bearer token
pub fn get(url: &str, token: &str) -> RequestBuilder {
    with_bearer(Request::get(url), token)
}

/// Create a POST request carrying the bearer token
pub fn post(url: &str, token: &str) -> RequestBuilder {
    with_bearer(Request::post(url), token)
}

/// Create a PUT request carrying the bearer token
pub fn put(url: &str, token: &str) -> RequestBuilder {
    with_bearer(Request::put(url), token)
}

/// Create a DELETE request carrying the bearer token
pub fn delete(url: &str, token: &str) -> RequestBuilder {
    with_bearer(Request::delete(url), token)
}

/// Send a request without a body
pub async fn send_request(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))
}

/// Serialize `payload` as the JSON body and send the request
pub async fn send_json<T: Serialize>(
    builder: RequestBuilder,
    payload: &T,
) -> Result<Response, ApiError> {
    let request = builder
        .json(payload)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))?;

    request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))
}
