use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Gender {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unsupported gender: {other}")),
        }
    }
}

/// One balance check as submitted by the input form. The age arrives as the
/// raw field text; the scorer parses it and fails closed when it is not an
/// integer. Gender is carried for the suggestion prompt only and never
/// influences the numeric rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceCheckRequest {
    pub age: String,
    pub gender: Gender,
    pub daily_study_hours: f64,
    pub weekly_extracurricular_hours: f64,
    pub daily_sleep_hours: f64,
}

/// Ideal daily hours for one age band. All three values are daily figures,
/// including extracurriculars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeProfile {
    pub ideal_study_hours: f64,
    pub ideal_sleep_hours: f64,
    pub ideal_extracurricular_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum SuggestionOutcome {
    /// Rating was a full five stars; no suggestion is requested.
    NotNeeded,
    /// Advice text returned by the suggestion service.
    Advice(String),
    /// The suggestion request failed; carries the user-visible message.
    Unavailable(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub rating: u8,
    pub suggestion: SuggestionOutcome,
}
