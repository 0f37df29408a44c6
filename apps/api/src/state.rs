use std::sync::Arc;

use crate::clients::jobs::JobSearch;
use crate::clients::ratings::EmployerRatings;
use crate::clients::summary::Summarizer;
use crate::store::UserStore;

/// Shared application state injected into the dialog route via Axum extractors.
/// Every collaborator sits behind a trait object so handler tests can swap in
/// doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub jobs: Arc<dyn JobSearch>,
    pub summarizer: Arc<dyn Summarizer>,
    pub ratings: Arc<dyn EmployerRatings>,
}
