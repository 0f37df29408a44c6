use tracing::info;

use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, elicit_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::{blank_preference_slots, Intent};
use crate::models::job::JobListing;
use crate::pager::{self, PageState};
use crate::state::AppState;

/// Reads the next unread listing out loud and moves the cursor past it.
///
/// The item is selected before the cursor moves, and the cursor write is
/// conditional on the value this turn read, so a duplicate dispatch cannot
/// skip a listing. Follow-up intents (summary, company info) find the listing
/// just shown at `reading_index - 1`.
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

    match pager::page_state(&profile) {
        PageState::Uninitialized => Ok(confirm_intent(
            session,
            "I'm sorry but you don't seem to have an active search. \
             Would you like me to start one now?",
            Intent::StartSearch.name(),
            None,
        )),
        PageState::Exhausted => Ok(confirm_intent(
            session,
            "That was the last job from your search. Would you like me to run a new one?",
            Intent::StartSearch.name(),
            None,
        )),
        PageState::Paging => {
            // Paging guarantees the cursor is in range.
            let Some(listing) = pager::current_item(&profile) else {
                return Ok(confirm_intent(
                    session,
                    "That was the last job from your search. Would you like me to run a new one?",
                    Intent::StartSearch.name(),
                    None,
                ));
            };
            let card = listing_card(listing);

            let next_index = pager::advance(&profile);
            state
                .store
                .set_reading_index(&event.user_id, profile.reading_index, next_index)
                .await?;

            info!(
                "Read listing {}/{} for user {}",
                next_index,
                profile.search_results.len(),
                event.user_id
            );

            Ok(elicit_intent(session, card))
        }
    }
}

fn listing_card(listing: &JobListing) -> String {
    format!(
        "Title: {}\
         \nCompany: {}\
         \nSnippet: {}\
         \nURL: {}\
         \nposted {}\
         \n\nThere are a few things I can do for you: \
         \n\nI can show you the summary of this job posting,\
         \n\nI can also give you more information about the company,\
         \n\nor I can move on to the next search result. Let me know! :)",
        listing.title, listing.company, listing.snippet, listing.url, listing.posted_relative
    )
}
