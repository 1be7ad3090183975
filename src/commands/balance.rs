use crate::commands::{AppState, CommandResult};
use crate::models::balance::{BalanceCheckRequest, BalanceReport};

/// Score one routine and, when the rating is short of five stars, attach a
/// suggestion (or the reason one could not be fetched).
pub async fn balance_check(
    state: &AppState,
    request: BalanceCheckRequest,
) -> CommandResult<BalanceReport> {
    Ok(state.balance().check_balance(&request).await?)
}

/// Whether a balance check is currently in flight, for the loading spinner.
pub fn balance_is_loading(state: &AppState) -> bool {
    state.balance().is_loading()
}
