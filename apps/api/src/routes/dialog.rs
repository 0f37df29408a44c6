use axum::{extract::State, Json};
use tracing::error;

use crate::dialog::event::IntentRequest;
use crate::dialog::response::{close, DialogResponse, FulfillmentState};
use crate::errors::AppError;
use crate::intents;
use crate::state::AppState;

/// POST /api/v1/dialog
/// The single dispatch endpoint the dialog front end calls once per turn.
///
/// A failed handler still answers with a well-formed directive: the user gets
/// a transient-error close, never a raw error artifact. The one exception is
/// an intent name no handler exists for, which is a front-end configuration
/// problem and is reported as a request error.
pub async fn handle_dialog(
    State(state): State<AppState>,
    Json(event): Json<IntentRequest>,
) -> Result<Json<DialogResponse>, AppError> {
    let session = event.session_attributes.clone();

    match intents::dispatch(&state, &event).await {
        Ok(response) => Ok(Json(response)),
        Err(err @ AppError::UnknownIntent(_)) => Err(err),
        Err(err) => {
            error!(
                "Intent {} failed for user {}: {err}",
                event.current_intent.name, event.user_id
            );
            Ok(Json(close(
                session,
                FulfillmentState::Failed,
                "I'm sorry, something went wrong on my end. \
                 Give me a moment and then ask me again!",
            )))
        }
    }
}
