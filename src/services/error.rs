use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("payment gateway error: {0}")]
    GatewayError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<ServiceError> for ApplicationError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::UpstreamStatus(_)
            | ServiceError::NetworkError(_)
            | ServiceError::GatewayError(_) => ApplicationError::Upstream(error.to_string()),
            ServiceError::InternalError(msg) => ApplicationError::InternalError(msg),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ServiceError::NetworkError("request timeout".to_string())
        } else if error.is_connect() {
            ServiceError::NetworkError(format!("connection failed: {}", error))
        } else {
            ServiceError::NetworkError(error.to_string())
        }
    }
}
