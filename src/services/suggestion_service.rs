//! Boundary to the Gemini generateContent endpoint.
//!
//! A single outbound HTTP call per invocation: no retries, no caching. Every
//! failure mode (missing credential, transport error, non-2xx status,
//! malformed body) maps to a distinct [`SuggestionErrorCode`] so the shell
//! can show a specific message without inspecting network traffic.

use std::time::{Duration as StdDuration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult, SuggestionErrorCode};
use crate::models::suggestion::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::redact::redact_api_key;

const ENV_API_KEY: &str = "STUDYCUDDIE_GEMINI_API_KEY";
const ENV_BASE_URL: &str = "STUDYCUDDIE_GEMINI_BASE_URL";
const ENV_MODEL: &str = "STUDYCUDDIE_GEMINI_MODEL";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_HTTP_TIMEOUT: StdDuration = StdDuration::from_secs(30);

#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub http_timeout: StdDuration,
}

impl SuggestionConfig {
    /// Credential and endpoint are injected out of band through the
    /// environment; an absent key is detected here and reported later as a
    /// configuration error rather than a crash.
    pub fn from_env() -> Self {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(ENV_MODEL)
            .ok()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            base_url,
            model,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn request_suggestion(&self, prompt: &str) -> AppResult<String>;
}

pub struct SuggestionService {
    provider: Option<GeminiProvider>,
}

impl SuggestionService {
    pub fn new(config: SuggestionConfig) -> AppResult<Self> {
        let provider = match &config.api_key {
            Some(api_key) => Some(GeminiProvider::try_new(&config, api_key.clone())?),
            None => None,
        };
        Ok(Self { provider })
    }

    pub fn from_env() -> AppResult<Self> {
        Self::new(SuggestionConfig::from_env())
    }

    pub fn has_api_key(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn request_suggestion(&self, prompt: &str) -> AppResult<String> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::suggestion(
                SuggestionErrorCode::MissingApiKey,
                "Gemini API key is not configured",
            )
        })?;
        provider.request_suggestion(prompt).await
    }
}

struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiProvider {
    fn try_new(config: &SuggestionConfig, api_key: String) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|err| AppError::other(format!("failed to build Gemini HTTP client: {err}")))?;

        let base_url = config.base_url.trim_end_matches('/');
        let endpoint = format!(
            "{base_url}/v1beta/models/{}:generateContent?key={api_key}",
            config.model
        );

        Ok(Self { client, endpoint })
    }

    fn map_http_error(status: StatusCode, body: Option<&str>, correlation_id: &str) -> AppError {
        let details = body
            .filter(|text| !text.trim().is_empty())
            .map(|text| json!({ "body": text }));

        match status {
            StatusCode::UNAUTHORIZED => AppError::suggestion_with_details(
                SuggestionErrorCode::MissingApiKey,
                "Gemini API key is invalid or unauthorized",
                Some(correlation_id),
                details,
            ),
            StatusCode::FORBIDDEN => AppError::suggestion_with_details(
                SuggestionErrorCode::Forbidden,
                "Gemini API access was denied",
                Some(correlation_id),
                details,
            ),
            StatusCode::TOO_MANY_REQUESTS => AppError::suggestion_with_details(
                SuggestionErrorCode::RateLimited,
                "Gemini is rate limiting requests, try again shortly",
                Some(correlation_id),
                details,
            ),
            status if status.is_server_error() => AppError::suggestion_with_details(
                SuggestionErrorCode::ServiceUnavailable,
                format!(
                    "Gemini is temporarily unavailable (status {})",
                    status.as_u16()
                ),
                Some(correlation_id),
                details,
            ),
            StatusCode::BAD_REQUEST => AppError::suggestion_with_details(
                SuggestionErrorCode::InvalidRequest,
                "Gemini rejected the request format",
                Some(correlation_id),
                details,
            ),
            StatusCode::NOT_FOUND => AppError::suggestion_with_details(
                SuggestionErrorCode::InvalidRequest,
                "Gemini endpoint path is invalid",
                Some(correlation_id),
                details,
            ),
            status => AppError::suggestion_with_details(
                SuggestionErrorCode::Unknown,
                format!("Gemini returned unexpected status {}", status.as_u16()),
                Some(correlation_id),
                details,
            ),
        }
    }

    fn error_from_reqwest(err: reqwest::Error, correlation_id: &str) -> AppError {
        if err.is_timeout() {
            AppError::suggestion_with_details(
                SuggestionErrorCode::HttpTimeout,
                "Gemini request timed out",
                Some(correlation_id),
                None,
            )
        } else if err.is_connect() {
            AppError::suggestion_with_details(
                SuggestionErrorCode::ServiceUnavailable,
                "could not reach the Gemini service",
                Some(correlation_id),
                None,
            )
        } else if let Some(status) = err.status() {
            Self::map_http_error(status, None, correlation_id)
        } else {
            AppError::suggestion_with_details(
                SuggestionErrorCode::Unknown,
                format!("Gemini request failed: {err}"),
                Some(correlation_id),
                None,
            )
        }
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn request_suggestion(&self, prompt: &str) -> AppResult<String> {
        let correlation_id = Uuid::new_v4().to_string();
        let request_body = GenerateContentRequest::from_prompt(prompt);

        debug!(
            target: "app::suggestion::gemini",
            correlation_id = %correlation_id,
            endpoint = %redact_api_key(&self.endpoint),
            prompt_len = prompt.len(),
            "requesting balance suggestion"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let latency_ms = start.elapsed().as_millis();

                if !status.is_success() {
                    let detail = resp.text().await.unwrap_or_default();
                    warn!(
                        target: "app::suggestion::gemini",
                        correlation_id = %correlation_id,
                        status = status.as_u16(),
                        latency_ms,
                        "Gemini returned non-success status"
                    );
                    return Err(Self::map_http_error(
                        status,
                        Some(detail.as_str()),
                        correlation_id.as_str(),
                    ));
                }

                let body: GenerateContentResponse = resp.json().await.map_err(|err| {
                    AppError::suggestion_with_details(
                        SuggestionErrorCode::InvalidResponse,
                        "failed to parse the Gemini response",
                        Some(correlation_id.as_str()),
                        Some(json!({ "reason": err.to_string() })),
                    )
                })?;

                let text = body.first_text().ok_or_else(|| {
                    AppError::suggestion_with_details(
                        SuggestionErrorCode::InvalidResponse,
                        "Gemini response carried no suggestion text",
                        Some(correlation_id.as_str()),
                        Some(json!({ "reason": "missing_candidate_text" })),
                    )
                })?;

                debug!(
                    target: "app::suggestion::gemini",
                    correlation_id = %correlation_id,
                    latency_ms,
                    response_len = text.len(),
                    "Gemini suggestion received"
                );

                Ok(text.to_string())
            }
            Err(err) => {
                warn!(
                    target: "app::suggestion::gemini",
                    correlation_id = %correlation_id,
                    "Gemini request failed before a response arrived"
                );
                Err(Self::error_from_reqwest(err, correlation_id.as_str()))
            }
        }
    }
}

pub mod testing {
    use super::*;

    /// Expose the Gemini status mapping for integration tests without
    /// widening the public API surface.
    pub fn map_http_error(status: StatusCode) -> AppError {
        GeminiProvider::map_http_error(status, None, "test-correlation-id")
    }

    pub async fn request_suggestion_via_http(
        base_url: &str,
        timeout: StdDuration,
        prompt: &str,
    ) -> AppResult<String> {
        let config = SuggestionConfig {
            api_key: Some("test-key".to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
            http_timeout: timeout,
        };
        let provider = GeminiProvider::try_new(&config, "test-key".to_string())?;
        provider.request_suggestion(prompt).await
    }
}
