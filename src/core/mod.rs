pub mod error;
pub(crate) mod http;

pub use error::{ApiError, ApiResult, DoubleSettle, ScenarioError, ScenarioResult, ServiceError};
