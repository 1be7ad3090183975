//! Prompt construction for the suggestion service.

use crate::models::balance::BalanceCheckRequest;

/// Natural-language prompt sent to the suggestion endpoint when the rating
/// falls short of five stars. Embeds the raw routine values plus gender;
/// gender is demographic context for the text generator and nothing more.
pub fn build_suggestion_prompt(request: &BalanceCheckRequest) -> String {
    format!(
        "A student aged {}, gender {}, studies for {} hours/day, does {} hours/week \
         of extracurriculars, and sleeps {} hours daily. Provide concise suggestions \
         to improve their work-life balance.",
        request.age.trim(),
        request.gender,
        request.daily_study_hours,
        request.weekly_extracurricular_hours,
        request.daily_sleep_hours
    )
}
