//! Orchestration for one "check balance" action: validate, score, and (for
//! imperfect ratings) fetch a suggestion, with the loading flag guaranteed
//! to clear exactly once on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::balance::{BalanceCheckRequest, BalanceReport, SuggestionOutcome};
use crate::services::balance_scorer::{
    self, MAX_STAR_RATING, MAX_SUPPORTED_AGE, MIN_SUPPORTED_AGE,
};
use crate::services::prompt_templates::build_suggestion_prompt;
use crate::services::suggestion_service::SuggestionService;

const AGE_VALIDATION_MESSAGE: &str = "Please enter a valid age between 10 and 18.";

pub struct BalanceService {
    suggestions: Arc<SuggestionService>,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag on drop, so the loading state terminates once
/// on every exit path of a check.
struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> AppResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::conflict("a balance check is already running"));
        }
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl BalanceService {
    pub fn new(suggestions: Arc<SuggestionService>) -> Self {
        Self {
            suggestions,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a suggestion request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one balance check. Age validation happens before anything else;
    /// an invalid age aborts the check without a network call. Suggestion
    /// failures are converted to a user-visible message inside the report
    /// rather than failing the whole check.
    pub async fn check_balance(&self, request: &BalanceCheckRequest) -> AppResult<BalanceReport> {
        let age: i32 = request
            .age
            .trim()
            .parse()
            .map_err(|_| AppError::validation(AGE_VALIDATION_MESSAGE))?;
        if !(MIN_SUPPORTED_AGE..=MAX_SUPPORTED_AGE).contains(&age) {
            return Err(AppError::validation(AGE_VALIDATION_MESSAGE));
        }

        let _loading = LoadingGuard::acquire(&self.in_flight)?;

        let rating = balance_scorer::star_rating(request);
        debug!(target: "app::balance", age, rating, "computed star rating");

        if rating >= MAX_STAR_RATING {
            return Ok(BalanceReport {
                rating,
                suggestion: SuggestionOutcome::NotNeeded,
            });
        }

        let prompt = build_suggestion_prompt(request);
        let suggestion = match self.suggestions.request_suggestion(&prompt).await {
            Ok(text) => SuggestionOutcome::Advice(text),
            Err(error) => {
                info!(
                    target: "app::balance",
                    error = %error,
                    "suggestion request failed, surfacing the message instead"
                );
                SuggestionOutcome::Unavailable(error.to_string())
            }
        };

        Ok(BalanceReport { rating, suggestion })
    }
}
