use std::collections::HashMap;

use serde::Deserialize;

/// One dispatch event from the dialog front end, sent once per conversation
/// turn after the front end has classified the utterance into an intent and
/// resolved its slots.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub user_id: String,
    /// Opaque front-end state, echoed back unchanged in every directive.
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
    pub current_intent: CurrentIntent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
}

impl IntentRequest {
    /// A resolved slot value, treating an absent key and an explicit null the
    /// same way.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
    }
}
