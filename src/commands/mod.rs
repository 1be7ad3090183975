//! Command facade for the application shell.
//!
//! Every command takes [`AppState`] plus plain serializable inputs and
//! returns [`CommandResult`], so a UI layer can invoke them without knowing
//! anything about the services behind them.

pub mod balance;
pub mod planner;

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map as JsonMap, Value as JsonValue};
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::services::balance_service::BalanceService;
use crate::services::planner_service::PlannerService;
use crate::services::suggestion_service::{SuggestionConfig, SuggestionService};

pub struct AppState {
    balance_service: BalanceService,
    planner_service: PlannerService,
    suggestion_service: Arc<SuggestionService>,
}

impl AppState {
    pub fn new(config: SuggestionConfig) -> AppResult<Self> {
        let suggestion_service = Arc::new(SuggestionService::new(config)?);
        Ok(Self {
            balance_service: BalanceService::new(Arc::clone(&suggestion_service)),
            planner_service: PlannerService::new(),
            suggestion_service,
        })
    }

    pub fn from_env() -> AppResult<Self> {
        Self::new(SuggestionConfig::from_env())
    }

    pub fn balance(&self) -> &BalanceService {
        &self.balance_service
    }

    pub fn planner(&self) -> &PlannerService {
        &self.planner_service
    }

    pub fn suggestions(&self) -> &SuggestionService {
        &self.suggestion_service
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Error shape handed across the command boundary. `code` is a stable
/// machine-readable tag; `message` is safe to show to the user as is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation {
                message, details, ..
            } => Self {
                code: "VALIDATION_ERROR".to_string(),
                message,
                details,
            },
            AppError::NotFound => Self::new("NOT_FOUND", "the requested record does not exist"),
            AppError::Conflict { message } => Self {
                code: "CONFLICT".to_string(),
                message,
                details: None,
            },
            AppError::Suggestion {
                code,
                message,
                correlation_id,
                details,
            } => {
                let mut merged = match details {
                    Some(JsonValue::Object(map)) => map,
                    Some(other) => {
                        let mut map = JsonMap::new();
                        map.insert("detail".to_string(), other);
                        map
                    }
                    None => JsonMap::new(),
                };
                if let Some(id) = correlation_id {
                    merged.insert("correlationId".to_string(), json!(id));
                }
                Self {
                    code: code.as_str().to_string(),
                    message,
                    details: (!merged.is_empty()).then(|| JsonValue::Object(merged)),
                }
            }
            AppError::Serialization(err) => {
                error!(target: "app::command", error = %err, "serialization failure");
                Self::new("UNKNOWN", "serialization failed")
            }
            AppError::Io(err) => {
                error!(target: "app::command", error = %err, "io failure");
                Self::new("UNKNOWN", "filesystem access failed")
            }
            AppError::Other(message) => Self::new("UNKNOWN", message),
        }
    }
}
