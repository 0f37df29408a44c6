//! Intent handlers — one module per front-end intent.
//!
//! Every handler follows the same composition: load the profile, branch on
//! profile existence / list emptiness / cursor state, optionally call one
//! external source, optionally persist one state change, and produce exactly
//! one dialog directive.

pub mod company_info;
pub mod fill_preferences;
pub mod job_summary;
pub mod read_results;
pub mod say_hello;
pub mod start_search;

use std::collections::HashMap;

use tracing::info;

use crate::dialog::event::IntentRequest;
use crate::dialog::response::DialogResponse;
use crate::errors::AppError;
use crate::state::AppState;

/// The intents the front end is configured to route here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SayHello,
    FillPreferences,
    StartSearch,
    ReadResults,
    JobSummary,
    CompanyInfo,
}

impl Intent {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "SayHello" => Some(Intent::SayHello),
            "FillPreferences" => Some(Intent::FillPreferences),
            "StartSearch" => Some(Intent::StartSearch),
            "ReadResults" => Some(Intent::ReadResults),
            "JobSummary" => Some(Intent::JobSummary),
            "CompanyInfo" => Some(Intent::CompanyInfo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intent::SayHello => "SayHello",
            Intent::FillPreferences => "FillPreferences",
            Intent::StartSearch => "StartSearch",
            Intent::ReadResults => "ReadResults",
            Intent::JobSummary => "JobSummary",
            Intent::CompanyInfo => "CompanyInfo",
        }
    }
}

/// Routes one dispatch event to its handler.
pub async fn dispatch(
    state: &AppState,
    event: &IntentRequest,
) -> Result<DialogResponse, AppError> {
    let intent = Intent::parse(&event.current_intent.name)
        .ok_or_else(|| AppError::UnknownIntent(event.current_intent.name.clone()))?;

    info!("Dispatching {} for user {}", intent.name(), event.user_id);

    match intent {
        Intent::SayHello => say_hello::handle(state, event).await,
        Intent::FillPreferences => fill_preferences::handle(state, event).await,
        Intent::StartSearch => start_search::handle(state, event).await,
        Intent::ReadResults => read_results::handle(state, event).await,
        Intent::JobSummary => job_summary::handle(state, event).await,
        Intent::CompanyInfo => company_info::handle(state, event).await,
    }
}

/// The empty slot template used when routing a user into preference capture.
pub fn blank_preference_slots() -> HashMap<String, Option<String>> {
    ["Country", "City", "JobKeyword", "JobType"]
        .iter()
        .map(|slot| (slot.to_string(), None))
        .collect()
}
