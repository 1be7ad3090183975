use std::fmt;

use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionErrorCode {
    MissingApiKey,
    Forbidden,
    HttpTimeout,
    RateLimited,
    InvalidResponse,
    InvalidRequest,
    ServiceUnavailable,
    Unknown,
}

impl SuggestionErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionErrorCode::MissingApiKey => "MISSING_API_KEY",
            SuggestionErrorCode::Forbidden => "FORBIDDEN",
            SuggestionErrorCode::HttpTimeout => "HTTP_TIMEOUT",
            SuggestionErrorCode::RateLimited => "RATE_LIMITED",
            SuggestionErrorCode::InvalidResponse => "INVALID_RESPONSE",
            SuggestionErrorCode::InvalidRequest => "INVALID_REQUEST",
            SuggestionErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            SuggestionErrorCode::Unknown => "UNKNOWN_SUGGESTION_ERROR",
        }
    }
}

impl fmt::Display for SuggestionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        details: Option<JsonValue>,
    },

    #[error("{message}")]
    Suggestion {
        code: SuggestionErrorCode,
        message: String,
        correlation_id: Option<String>,
        details: Option<JsonValue>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation {
            message,
            source: None,
            details: None,
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, details = %details, "validation error with details");
        AppError::Validation {
            message,
            source: None,
            details: Some(details),
        }
    }

    pub fn suggestion(code: SuggestionErrorCode, message: impl Into<String>) -> Self {
        Self::suggestion_with_details(code, message, None, None)
    }

    pub fn suggestion_with_details(
        code: SuggestionErrorCode,
        message: impl Into<String>,
        correlation_id: Option<&str>,
        details: Option<JsonValue>,
    ) -> Self {
        let message = message.into();
        let correlation = correlation_id.map(|value| value.to_string());
        match (&correlation, &details) {
            (Some(id), Some(payload)) => {
                warn!(
                    target: "app::suggestion::error",
                    code = %code,
                    correlation_id = %id,
                    details = %payload,
                    %message
                );
            }
            (Some(id), None) => {
                warn!(
                    target: "app::suggestion::error",
                    code = %code,
                    correlation_id = %id,
                    %message
                );
            }
            (None, Some(payload)) => {
                warn!(target: "app::suggestion::error", code = %code, details = %payload, %message);
            }
            (None, None) => {
                warn!(target: "app::suggestion::error", code = %code, %message);
            }
        }

        AppError::Suggestion {
            code,
            message,
            correlation_id: correlation,
            details,
        }
    }

    pub fn suggestion_code(&self) -> Option<SuggestionErrorCode> {
        match self {
            AppError::Suggestion { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn suggestion_correlation_id(&self) -> Option<&str> {
        match self {
            AppError::Suggestion { correlation_id, .. } => correlation_id.as_deref(),
            _ => None,
        }
    }

    pub fn suggestion_details(&self) -> Option<&JsonValue> {
        match self {
            AppError::Suggestion { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::conflict", %message, "conflict error");
        AppError::Conflict { message }
    }

    pub fn not_found() -> Self {
        warn!(target: "app::planner", "record not found");
        AppError::NotFound
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}
