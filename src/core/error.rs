use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Result alias for API client operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result alias for scenario drivers and validators
pub type ScenarioResult<T> = std::result::Result<T, ScenarioError>;

/// Errors produced by the headless and plugin API clients.
///
/// `Client` covers requests the platform understood but rejected; everything
/// else is a failure at the transport boundary or in decoding the exchange.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Structured error payload returned by the platform
    #[error("API error: {0}")]
    Client(ServiceError),

    /// Non-2xx response without a structured error payload
    #[error("Server error: {code} {body}")]
    Transport { code: u16, body: String },

    /// Connection-level failure before any status code was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Successful exchange whose body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        ApiError::Configuration(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }
}

/// Error payload the platform returns alongside a rejected request.
///
/// The headless API reports `status`/`detail`, the plugin API
/// `error_code`/`error_message`; the aliases let one shape parse both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceError {
    #[serde(default, alias = "error_code", alias = "status")]
    pub code: Option<u32>,
    #[serde(alias = "error_message", alias = "detail")]
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Terminal outcome categories for one test scenario.
///
/// Expected failures from the remote boundary (`Api`, `Server`, `Network`)
/// and harness-side failures (`Assertion`, `Timeout`) all travel through the
/// completion signal as values; none of them is a panic.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// The platform rejected the request (validation, business rule)
    #[error("API error: {0}")]
    Api(String),

    /// HTTP-level failure, status code plus raw body
    #[error("Server error: {code} {body}")]
    Server { code: u16, body: String },

    /// The request never completed an HTTP exchange
    #[error("Network error: {0}")]
    Network(String),

    /// A validator or scenario expectation was not met
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// No settlement within the configured window
    #[error("scenario timed out after {0:?}")]
    Timeout(Duration),
}

impl From<ApiError> for ScenarioError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Client(service) => ScenarioError::Api(service.to_string()),
            ApiError::Transport { code, body } => ScenarioError::Server { code, body },
            ApiError::Network(e) => ScenarioError::Network(e.to_string()),
            ApiError::Decode(msg) => ScenarioError::Assertion(format!("malformed response: {msg}")),
            ApiError::Configuration(msg) => {
                ScenarioError::Assertion(format!("configuration: {msg}"))
            }
        }
    }
}

/// A completion signal was settled twice. Harness defect, never a test
/// outcome; callers treat it as fatal.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("completion signal was already settled")]
pub struct DoubleSettle;
