use tracing::{debug, warn};

use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, elicit_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::{blank_preference_slots, Intent};
use crate::pager;
use crate::state::AppState;

/// Summarizes the listing the preceding read turn presented.
///
/// This handler runs after a read has already advanced the cursor, so it
/// looks at `last_shown_item`, never `current_item`, and it does not move the
/// cursor itself. Summarization is best-effort: any failure or empty answer
/// falls back to the listing's own snippet.
pub async fn handle(state: &AppState, event: &IntentRequest) -> Result<DialogResponse, AppError> {
    let session = event.session_attributes.clone();

    let Some(profile) = state.store.get(&event.user_id).await? else {
        return Ok(confirm_intent(
            session,
            "Hello there! I don't seem to have met you before. I'll need you to setup your \
             preferences first before I can help! Would you like to do that now?",
            Intent::FillPreferences.name(),
            Some(blank_preference_slots()),
        ));
    };

    let Some(listing) = pager::last_shown_item(&profile) else {
        return Ok(confirm_intent(
            session,
            "I haven't read you a job posting yet, so there's nothing to summarize. \
             Want me to read your next result?",
            Intent::ReadResults.name(),
            None,
        ));
    };

    let summary = match state.summarizer.summarize(&listing.url).await {
        Ok(Some(summary)) => summary,
        Ok(None) => {
            debug!("Summary source had nothing for {}, using the snippet", listing.url);
            listing.snippet.clone()
        }
        Err(err) => {
            warn!("Summarizer call failed ({err}), using the snippet");
            listing.snippet.clone()
        }
    };

    Ok(elicit_intent(
        session,
        format!(
            "{summary}\
             \n\nI can give you more information about the company, \
             or I can move on to the next search result. Let me know! :)"
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::support::{
        app_state, app_state_with, confirmed_intent, event, message_text, StubJobSearch,
        StubRatings, StubSummarizer,
    };
    use crate::models::job::JobListing;
    use crate::models::user::UserProfile;
    use crate::store::memory::MemoryUserStore;

    fn read_once_profile() -> UserProfile {
        // Job A was just shown: the read turn advanced the cursor to 1.
        UserProfile::sample("u").with_results(
            vec![
                JobListing::sample("Job A", "Acme"),
                JobListing::sample("Job B", "Globex"),
            ],
            1,
        )
    }

    fn state_with_summarizer(summarizer: StubSummarizer) -> crate::state::AppState {
        app_state_with(
            MemoryUserStore::with_profile(read_once_profile()),
            StubJobSearch::empty(),
            summarizer,
            StubRatings::not_found(),
        )
    }

    #[tokio::test]
    async fn test_summarizes_the_listing_just_shown() {
        let state = state_with_summarizer(StubSummarizer::with_summary("A fine rust job."));
        let response = handle(&state, &event("u", "JobSummary")).await.unwrap();

        assert!(message_text(&response).starts_with("A fine rust job."));
        // No second cursor bump: the follow-up menu still refers to Job A.
        assert_eq!(state.store.get("u").await.unwrap().unwrap().reading_index, 1);
    }

    #[tokio::test]
    async fn test_empty_summary_falls_back_to_snippet() {
        let state = state_with_summarizer(StubSummarizer::empty());
        let response = handle(&state, &event("u", "JobSummary")).await.unwrap();
        assert!(message_text(&response).starts_with("Job A snippet"));
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_to_snippet() {
        let state = state_with_summarizer(StubSummarizer::failing());
        let response = handle(&state, &event("u", "JobSummary")).await.unwrap();
        assert!(message_text(&response).starts_with("Job A snippet"));
    }

    #[tokio::test]
    async fn test_nothing_read_yet_routes_back_to_reading() {
        let profile = UserProfile::sample("u")
            .with_results(vec![JobListing::sample("Job A", "Acme")], 0);
        let state = app_state(MemoryUserStore::with_profile(profile));

        let response = handle(&state, &event("u", "JobSummary")).await.unwrap();
        assert_eq!(confirmed_intent(&response), "ReadResults");
    }

    #[tokio::test]
    async fn test_unknown_user_routed_to_preference_capture() {
        let state = app_state(MemoryUserStore::new());
        let response = handle(&state, &event("ghost", "JobSummary")).await.unwrap();
        assert_eq!(confirmed_intent(&response), "FillPreferences");
    }
}
