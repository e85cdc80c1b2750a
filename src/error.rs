use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or incomplete user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Credentials rejected by a service connection
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    /// Unknown service, user or session
    #[error("Not found: {0}")]
    NotFound(String),
    /// A chat message is already outstanding for this session
    #[error("Advisor busy: {0}")]
    AdvisorBusy(String),
    /// Advisor integration switched off in configuration
    #[error("Advisor disabled")]
    AdvisorDisabled,
    /// Upstream advisor endpoint answered with an error
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AdvisorBusy(_) => StatusCode::CONFLICT,
            Self::AdvisorDisabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            Self::HttpRequest(_) => StatusCode::BAD_GATEWAY,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidCredentials(_) => "invalid_credentials",
            Self::NotFound(_) => "not_found",
            Self::AdvisorBusy(_) => "advisor_busy",
            Self::AdvisorDisabled => "advisor_disabled",
            Self::UpstreamError { .. } => "upstream_error",
            Self::HttpRequest(_) => "http_request_error",
            Self::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        crate::metrics::record_error(self.type_name());

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": self.type_name(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::NotFound("user 42".to_string());
        assert_eq!(error.to_string(), "Not found: user 42");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(AppError::AdvisorDisabled.type_name(), "advisor_disabled");
        assert_eq!(
            AppError::InvalidCredentials("blank".to_string()).type_name(),
            "invalid_credentials"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidCredentials("blank".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound("x".to_string()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AdvisorDisabled.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            AppError::InternalError("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let from_anyhow: AppError = anyhow::anyhow!("config missing").into();
        assert_eq!(from_anyhow.type_name(), "internal_error");
    }

    #[tokio::test]
    async fn test_error_response() {
        let response = AppError::AdvisorBusy("session-1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::InvalidInput("empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
