//! HTTP plumbing shared by all resource modules: base URL, bearer
//! attachment from the stored session, and decode-at-the-boundary into the
//! typed response shapes. Every call returns `Result<T, ApiError>`.

pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod transactions;

use crate::session;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE_URL: &str = "https://expensetracker-backend-59n3.onrender.com/api";

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ApiError {
    /// 401 from any authenticated call. The caller clears the session and
    /// returns to login; the original request is never retried.
    #[error("session expired")]
    Unauthorized,
    /// Non-success status with whatever message the backend supplied.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// The backend-provided message when there is one, otherwise the
    /// caller's generic fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Error body shape used by the backend for validation failures.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn fail(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_default();
    ApiError::Api { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(fail(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(&url(path)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(builder)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_json(Request::post(&url(path)), body).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_json(Request::put(&url(path)), body).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(fail(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::Api {
            status: 400,
            message: "Budget already exists for this category".to_string(),
        };
        assert_eq!(
            err.message_or("Failed to save budget"),
            "Budget already exists for this category"
        );
    }

    #[test]
    fn empty_backend_message_falls_back() {
        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.message_or("Failed to save budget"), "Failed to save budget");
    }

    #[test]
    fn network_and_decode_errors_use_the_fallback() {
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or("Something went wrong"), "Something went wrong");

        let decode = ApiError::Decode("missing field `category`".to_string());
        assert_eq!(decode.message_or("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn error_body_shape_is_lenient() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
