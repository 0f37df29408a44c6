#![allow(dead_code)]

//! Outbound dialog directives — the three shapes the front end understands.
//!
//! The wire format is fixed by the front end: PascalCase `type` values,
//! camelCase keys, and a `PlainText` message envelope. Session attributes are
//! always carried through unchanged from the inbound event.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: &'static str,
    pub content: String,
}

impl Message {
    fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText",
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Keep the conversation open without suggesting a specific next intent.
    ElicitIntent { message: Message },
    /// Pose a yes/no choice; on agreement the front end runs `intent_name`,
    /// optionally seeded with `slots`.
    ConfirmIntent {
        message: Message,
        intent_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        slots: Option<HashMap<String, Option<String>>>,
    },
    /// End the conversation turn with a terminal outcome.
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: HashMap<String, String>,
    pub dialog_action: DialogAction,
}

pub fn elicit_intent(
    session_attributes: HashMap<String, String>,
    text: impl Into<String>,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitIntent {
            message: Message::plain(text),
        },
    }
}

pub fn confirm_intent(
    session_attributes: HashMap<String, String>,
    text: impl Into<String>,
    intent_name: &str,
    slots: Option<HashMap<String, Option<String>>>,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ConfirmIntent {
            message: Message::plain(text),
            intent_name: intent_name.to_string(),
            slots,
        },
    }
}

pub fn close(
    session_attributes: HashMap<String, String>,
    fulfillment_state: FulfillmentState,
    text: impl Into<String>,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message: Message::plain(text),
        },
    }
}
