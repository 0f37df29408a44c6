use tracing::info;

use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::Intent;
use crate::models::user::Preferences;
use crate::state::AppState;

/// Captures the four search preference slots, creating the record on first
/// contact. Re-capture overwrites the preference fields wholesale but leaves
/// any stored search results and the reading cursor alone.
pub async fn handle(state: &AppState, event: &IntentRequest) -> Result<DialogResponse, AppError> {
    let prefs = Preferences {
        country: event.slot("Country").map(str::to_string),
        city: event.slot("City").map(str::to_string),
        keywords: event.slot("JobKeyword").map(str::to_string),
        job_type: event.slot("JobType").map(str::to_string),
    };

    info!("Capturing preferences for user {}", event.user_id);
    state.store.upsert_preferences(&event.user_id, &prefs).await?;

    Ok(confirm_intent(
        event.session_attributes.clone(),
        "Awesome! I'll remember those for you the next time you message me again.\
         \n\nSo... Would you like to start your search now?",
        Intent::StartSearch.name(),
        None,
    ))
}
