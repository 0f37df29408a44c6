use tracing::warn;

use crate::clients::jobs::SearchQuery;
use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, elicit_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::{blank_preference_slots, Intent};
use crate::state::AppState;

/// Runs a job search with the stored preferences. A non-empty result replaces
/// the stored list and restarts the reading cursor; an empty result and a
/// search transport failure both leave the stored state untouched.
pub async fn handle(state: &AppState, event: &IntentRequest) -> Result<DialogResponse, AppError> {
    let session = event.session_attributes.clone();

    let Some(profile) = state.store.get(&event.user_id).await? else {
        return Ok(confirm_intent(
            session,
            "Heya! Before we can start searching, we need to setup your preferences first! \
             Would you like to do that now?",
            Intent::FillPreferences.name(),
            Some(blank_preference_slots()),
        ));
    };

    let keywords = profile.keywords.clone().unwrap_or_default();
    let country = profile.country.clone().unwrap_or_default();
    let query = SearchQuery {
        keywords: keywords.clone(),
        country: country.clone(),
        city: profile.city.clone(),
        job_type: profile.job_type.clone(),
    };

    let outcome = match state.jobs.search(&query).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("Job search failed for user {}: {err}", event.user_id);
            return Ok(elicit_intent(
                session,
                "I'm sorry, I couldn't reach the job search service just now. \
                 Give me a little while and then ask me to search again!",
            ));
        }
    };

    if outcome.listings.is_empty() {
        let descriptor = match &profile.job_type {
            Some(job_type) => format!("{job_type} {keywords}"),
            None => keywords.clone(),
        };
        return Ok(confirm_intent(
            session,
            format!(
                "I'm sorry but I can't find any {descriptor} jobs in {country}. \
                 Would you like to update your search preferences instead?"
            ),
            Intent::FillPreferences.name(),
            None,
        ));
    }

    state
        .store
        .replace_search_results(&event.user_id, &outcome.listings)
        .await?;

    Ok(confirm_intent(
        session,
        format!(
            "I've found {} jobs for you but I've reduced that to the top {} results. \
             Would you like me to start giving you the details for the first one?",
            outcome.total_results,
            outcome.listings.len()
        ),
        Intent::ReadResults.name(),
        None,
    ))
}
