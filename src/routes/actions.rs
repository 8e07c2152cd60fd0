// ABOUTME: Action endpoint speaking the dialogue runtime's custom-action protocol
// ABOUTME: Decodes the tracker, runs the named action, and returns slot events and responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Action webhook
//!
//! The dialogue runtime posts `{next_action, sender_id, tracker}` and expects
//! `{events, responses}` back. Slot state lives in the runtime: the preference
//! is read from `tracker.slots` and written back as `slot` events.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::{Action, ActionContext};
use crate::constants::slots;
use crate::conversation::{SlotEvent, TrackerSlots};
use crate::errors::{AppError, AppResult};
use crate::logging::AssistantLogger;
use crate::resources::AssistantResources;

/// Action call from the dialogue runtime
#[derive(Debug, Deserialize)]
pub struct ActionCallRequest {
    /// Name of the action to run
    pub next_action: String,
    /// Conversation id
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Conversation tracker snapshot
    #[serde(default)]
    pub tracker: TrackerPayload,
}

/// Tracker snapshot sent with each action call
#[derive(Debug, Default, Deserialize)]
pub struct TrackerPayload {
    /// Conversation id
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Current slot values
    #[serde(default)]
    pub slots: HashMap<String, Value>,
    /// Most recent user message
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// Most recent user message as parsed by the runtime
#[derive(Debug, Default, Deserialize)]
pub struct LatestMessage {
    /// Raw text
    #[serde(default)]
    pub text: Option<String>,
    /// Recognized intent
    #[serde(default)]
    pub intent: Option<IntentPayload>,
}

/// Recognized intent
#[derive(Debug, Default, Deserialize)]
pub struct IntentPayload {
    /// Intent label
    #[serde(default)]
    pub name: Option<String>,
}

/// Action result returned to the runtime
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionCallResponse {
    /// Slot writes
    pub events: Vec<SlotEvent>,
    /// Messages to utter
    pub responses: Vec<BotResponse>,
}

/// One message to utter
#[derive(Debug, Serialize, Deserialize)]
pub struct BotResponse {
    /// Message text
    pub text: String,
}

/// Action webhook routes
pub struct ActionRoutes;

impl ActionRoutes {
    /// Create the action webhook route
    pub fn routes(resources: Arc<AssistantResources>) -> Router {
        Router::new()
            .route("/webhook", post(Self::run_action))
            .with_state(resources)
    }

    async fn run_action(
        State(resources): State<Arc<AssistantResources>>,
        Json(request): Json<ActionCallRequest>,
    ) -> AppResult<Json<ActionCallResponse>> {
        let action = Action::from_name(&request.next_action)
            .ok_or_else(|| AppError::not_found(format!("Action '{}'", request.next_action)))?;

        let started = Instant::now();
        let session_id = request
            .sender_id
            .or(request.tracker.sender_id)
            .unwrap_or_default();
        let utterance = request.tracker.latest_message.text.unwrap_or_default();
        let intent = request
            .tracker
            .latest_message
            .intent
            .and_then(|intent| intent.name);
        let mut tracker_slots = TrackerSlots::new(request.tracker.slots);
        let feedback_type = tracker_slots
            .get_str(slots::FEEDBACK_TYPE)
            .map(str::to_owned);

        let mut context = ActionContext {
            session_id: &session_id,
            utterance: &utterance,
            intent: intent.as_deref(),
            feedback_type: feedback_type.as_deref(),
            preference: &mut tracker_slots,
            pipeline: &resources.pipeline,
        };
        let outcome = action.execute(&mut context).await;

        AssistantLogger::log_action(
            &session_id,
            action.name(),
            outcome.messages.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(Json(ActionCallResponse {
            events: outcome.events,
            responses: outcome
                .messages
                .into_iter()
                .map(|text| BotResponse { text })
                .collect(),
        }))
    }
}
