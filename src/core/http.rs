//! Shared response handling for both API clients.

use reqwest::Response;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult, ServiceError};

/// Decode a response body into `T`, splitting failures into the
/// client/transport taxonomy.
///
/// A 4xx with a parseable structured payload becomes `ApiError::Client`;
/// any other non-2xx (including unparseable 4xx bodies and all 5xx) is
/// `ApiError::Transport` carrying the status code and raw body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        return serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    if status.is_client_error() {
        if let Ok(service) = serde_json::from_str::<ServiceError>(&body) {
            tracing::debug!(code = ?service.code, "platform rejected request");
            return Err(ApiError::Client(service));
        }
    }

    Err(ApiError::Transport {
        code: status.as_u16(),
        body,
    })
}

/// Decode a response whose body carries no payload the caller needs
/// (empty bodies and 204s included). Error handling matches [`decode`].
pub(crate) async fn decode_unit(response: Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    if status.is_client_error() {
        if let Ok(service) = serde_json::from_str::<ServiceError>(&body) {
            tracing::debug!(code = ?service.code, "platform rejected request");
            return Err(ApiError::Client(service));
        }
    }

    Err(ApiError::Transport {
        code: status.as_u16(),
        body,
    })
}
