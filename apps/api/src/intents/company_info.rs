use tracing::warn;

use crate::clients::ratings::Employer;
use crate::dialog::event::IntentRequest;
use crate::dialog::response::{confirm_intent, elicit_intent, DialogResponse};
use crate::errors::AppError;
use crate::intents::{blank_preference_slots, Intent};
use crate::pager;
use crate::state::AppState;

/// Looks up employer ratings for the listing the preceding read turn
/// presented. Like the summary handler this runs after the cursor already
/// moved, so it reads `last_shown_item` and leaves the cursor alone.
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
            "I haven't read you a job posting yet, so there's no company to look up. \
             Want me to read your next result?",
            Intent::ReadResults.name(),
            None,
        ));
    };
    let company = listing.company.clone();

    let lookup = match state.ratings.lookup(&company).await {
        Ok(lookup) => lookup,
        Err(err) => {
            warn!("Ratings lookup failed for '{company}': {err}");
            return Ok(elicit_intent(
                session,
                format!(
                    "I'm sorry, I couldn't reach the ratings service to look up {company}. \
                     Do you want the job summary or should I move on to the next search result?"
                ),
            ));
        }
    };

    let Some(employer) = lookup.top_match else {
        return Ok(elicit_intent(
            session,
            format!(
                "I'm sorry but I can't seem to find the company {company} on Glassdoor.com. \
                 Do you want the job summary or should I move on to the next search result?"
            ),
        ));
    };

    let mut details = employer_card(&company, &employer, &lookup.attribution_url);

    if lookup.total_matches > 1 {
        details = format!(
            "I'm seeing more than one result when I searched for the company {company}, \
             so I'm showing you the most relevant one.\
             \n\n{details}\
             \n\nDid I show you the wrong company? You can find the others here: {}",
            lookup.attribution_url
        );
    }

    Ok(elicit_intent(session, details))
}

fn employer_card(company: &str, employer: &Employer, attribution_url: &str) -> String {
    let mut card = format!("Here's {company}'s ratings from Glassdoor.com: ");
    card.push_str(&rating_line("Overall Rating", employer.overall_rating));
    card.push_str(&rating_line(
        "Culture and Values",
        employer.culture_and_values_rating,
    ));
    card.push_str(&rating_line(
        "Senior Leadership",
        employer.senior_leadership_rating,
    ));
    card.push_str(&rating_line(
        "Compensation and Benefits",
        employer.compensation_and_benefits_rating,
    ));
    card.push_str(&rating_line(
        "Career Opportunities",
        employer.career_opportunities_rating,
    ));
    card.push_str(&rating_line(
        "Work/Life Balance",
        employer.work_life_balance_rating,
    ));
    card.push_str(&format!(
        "\n\n{:.0}% of employees recommend working at {company} to their friends.",
        employer.recommend_to_friend_rating
    ));
    if let Some(review) = &employer.featured_review {
        card.push_str(&format!(
            "\n\nHere's what people from {company} are saying about them:\
             \n\nPROS: {}\
             \n\nCONS: {}",
            review.pros, review.cons
        ));
    }
    card.push_str(&format!(
        "\n\nYou can learn more about {company} here: {attribution_url}"
    ));
    card.push_str("\n\nDo you want the job summary or should I move on to the next search result?");
    card
}

fn rating_line(label: &str, value: f64) -> String {
    format!("\n{label}: {value:.1}/5")
}
