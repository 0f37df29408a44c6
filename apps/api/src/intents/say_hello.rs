use tracing::debug;

use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, elicit_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::{blank_preference_slots, Intent};
use crate::state::AppState;

/// First-contact greeting. New users are routed straight into preference
/// capture; returning users get the resume-or-update menu.
pub async fn handle(state: &AppState, event: &IntentRequest) -> Result<DialogResponse, AppError> {
    let session = event.session_attributes.clone();

    match state.store.get(&event.user_id).await? {
        None => Ok(confirm_intent(
            session,
            "Hello there! I'm Jobba The Bot and I'm here to help you with your job search.\
             \nI've noticed that you don't have any preferences set yet. Do you want to set that up now?",
            Intent::FillPreferences.name(),
            Some(blank_preference_slots()),
        )),
        Some(profile) => {
            debug!(
                "Returning user {}, first seen {}",
                profile.user_id, profile.created_at
            );
            Ok(elicit_intent(
                session,
                "Welcome back! What would you like to do? \
                 \nYou can update your search preferences or you can also resume your search, just let me know!",
            ))
        }
    }
}
