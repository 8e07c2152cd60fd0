// ABOUTME: Local turn API backed by the in-process session store
// ABOUTME: Runs one action for a session and returns its messages and stored preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionContext};
use crate::conversation::{PreferenceAccessor, SessionStore, SlotEvent};
use crate::errors::{AppError, AppResult};
use crate::logging::AssistantLogger;
use crate::models::DietPreference;
use crate::resources::AssistantResources;

/// One user turn
#[derive(Debug, Deserialize, Serialize)]
pub struct TurnRequest {
    /// Existing session; a new one is created when absent
    #[serde(default)]
    pub session_id: Option<String>,
    /// User utterance
    #[serde(default)]
    pub text: String,
    /// Intent label, as a dialogue runtime would classify it
    #[serde(default)]
    pub intent: Option<String>,
    /// Action to run
    pub action: String,
    /// Feedback classification for `action_handle_feedback`
    #[serde(default)]
    pub feedback_type: Option<String>,
}

/// Result of one turn
#[derive(Debug, Deserialize, Serialize)]
pub struct TurnResponse {
    /// Session the turn ran in
    pub session_id: String,
    /// Messages uttered to the user
    pub messages: Vec<String>,
    /// Text returned by string-returning actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Slot writes made during the turn
    #[serde(default)]
    pub events: Vec<SlotEvent>,
    /// Preference stored after the turn
    pub preference: Option<DietPreference>,
}

/// Turn API routes
pub struct TurnRoutes;

impl TurnRoutes {
    /// Create the turn API route
    pub fn routes(resources: Arc<AssistantResources>) -> Router {
        Router::new()
            .route("/api/turns", post(Self::run_turn))
            .with_state(resources)
    }

    async fn run_turn(
        State(resources): State<Arc<AssistantResources>>,
        Json(request): Json<TurnRequest>,
    ) -> AppResult<Json<TurnResponse>> {
        let action = Action::from_name(&request.action)
            .ok_or_else(|| AppError::not_found(format!("Action '{}'", request.action)))?;

        let session_id = match request.session_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => SessionStore::new_session_id(),
        };

        let started = Instant::now();
        // Held until the response is built: turns of one session never overlap
        let mut state = resources.sessions.begin_turn(&session_id).await;

        let mut context = ActionContext {
            session_id: &session_id,
            utterance: &request.text,
            intent: request.intent.as_deref(),
            feedback_type: request.feedback_type.as_deref(),
            preference: &mut *state,
            pipeline: &resources.pipeline,
        };
        let outcome = action.execute(&mut context).await;
        let preference = PreferenceAccessor::preference(&*state);
        drop(state);

        AssistantLogger::log_action(
            &session_id,
            action.name(),
            outcome.messages.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(Json(TurnResponse {
            session_id,
            messages: outcome.messages,
            text: outcome.text,
            events: outcome.events,
            preference,
        }))
    }
}
