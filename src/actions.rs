// ABOUTME: Dialogue-runtime actions dispatched by name with a uniform execute contract
// ABOUTME: Preference storage, meal triggering, meal recommendation, and feedback handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Dialogue Actions
//!
//! The dialogue runtime names the action to run for a turn. Each [`Action`]
//! variant executes against an [`ActionContext`] and returns an
//! [`ActionOutcome`]; no state survives between executions except the
//! preference reached through the context's accessor.
//!
//! | Action name | Behaviour |
//! |---|---|
//! | `action_store_user_preference` | store the declared diet, utter confirmation plus meals |
//! | `action_trigger_meal` | return the recommendation text without uttering it |
//! | `action_recommend_meal` | utter the recommendation for the free-text request |
//! | `action_handle_feedback` | utter an acknowledgement for the `feedback_type` slot |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::constants::messages::{
    preference_confirmation, FEEDBACK_NEGATIVE, FEEDBACK_NEUTRAL, FEEDBACK_POSITIVE,
    PREFERENCE_NOT_RECOGNIZED,
};
use crate::constants::{intents, slots};
use crate::conversation::{PreferenceAccessor, SlotEvent};
use crate::errors::AppError;
use crate::logging::AssistantLogger;
use crate::pipeline::{RecommendationPipeline, RecommendationRequest};
use mealwise_intelligence::PreferenceExtractor;

/// Actions the dialogue runtime can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Store a declared diet preference and suggest meals for it
    StoreUserPreference,
    /// Produce recommendation text for composition by the caller
    TriggerMeal,
    /// Utter a recommendation for the free-text request
    RecommendMeal,
    /// Acknowledge user feedback
    HandleFeedback,
}

impl Action {
    /// Every action, in registration order
    pub const ALL: [Self; 4] = [
        Self::StoreUserPreference,
        Self::TriggerMeal,
        Self::RecommendMeal,
        Self::HandleFeedback,
    ];

    /// Name used by the dialogue runtime
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StoreUserPreference => "action_store_user_preference",
            Self::TriggerMeal => "action_trigger_meal",
            Self::RecommendMeal => "action_recommend_meal",
            Self::HandleFeedback => "action_handle_feedback",
        }
    }

    /// Look up an action by its runtime name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// Run the action for one turn
    pub async fn execute(self, context: &mut ActionContext<'_>) -> ActionOutcome {
        debug!(action = self.name(), intent = ?context.intent, "Executing action");
        match self {
            Self::StoreUserPreference => store_user_preference(context).await,
            Self::TriggerMeal => ActionOutcome::returning(recommendation_text(context).await),
            Self::RecommendMeal => {
                let mut outcome = ActionOutcome::default();
                outcome.utter(recommendation_text(context).await);
                outcome
            }
            Self::HandleFeedback => {
                let mut outcome = ActionOutcome::default();
                outcome.utter(feedback_acknowledgement(context.feedback_type));
                outcome
            }
        }
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::not_found(format!("Action '{s}'")))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an action may read or write during one turn
pub struct ActionContext<'a> {
    /// Session the turn belongs to
    pub session_id: &'a str,
    /// Latest user utterance
    pub utterance: &'a str,
    /// Intent label recognized by the dialogue runtime
    pub intent: Option<&'a str>,
    /// Value of the `feedback_type` slot
    pub feedback_type: Option<&'a str>,
    /// Access to the session's diet preference
    pub preference: &'a mut dyn PreferenceAccessor,
    /// Shared recommendation pipeline
    pub pipeline: &'a RecommendationPipeline,
}

/// Result of executing an action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// Messages uttered to the user, in order
    pub messages: Vec<String>,
    /// Slot writes for the dialogue runtime
    pub events: Vec<SlotEvent>,
    /// Text returned to the caller instead of uttered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ActionOutcome {
    /// Outcome carrying a returned text and no messages
    #[must_use]
    pub fn returning(text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::default()
        }
    }

    /// Append a message for the user
    pub fn utter(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Recommendation text for a free-text turn, using the stored preference
async fn recommendation_text(context: &ActionContext<'_>) -> String {
    let request = RecommendationRequest::from_utterance(
        context.utterance,
        context.preference.preference(),
        context.pipeline.keyword_extractor(),
    );
    context.pipeline.recommend(&request).await
}

async fn store_user_preference(context: &mut ActionContext<'_>) -> ActionOutcome {
    let mut outcome = ActionOutcome::default();

    if context.intent != Some(intents::DIET_PREFERENCE) {
        debug!(intent = ?context.intent, "Not a preference declaration, leaving state untouched");
        return outcome;
    }

    let Some(preference) = PreferenceExtractor::new().extract(context.utterance) else {
        outcome.utter(PREFERENCE_NOT_RECOGNIZED);
        return outcome;
    };

    context.preference.set_preference(preference);
    AssistantLogger::log_preference_change(context.session_id, preference.as_str());
    outcome
        .events
        .push(SlotEvent::slot_set(slots::USER_PREFERENCE, preference.as_str()));

    let request = RecommendationRequest::for_declared_preference(context.utterance, preference);
    let recommendation = context.pipeline.recommend(&request).await;
    outcome.utter(preference_confirmation(preference.as_str(), &recommendation));
    outcome
}

fn feedback_acknowledgement(feedback_type: Option<&str>) -> &'static str {
    match feedback_type {
        Some("positive") => FEEDBACK_POSITIVE,
        Some("negative") => FEEDBACK_NEGATIVE,
        _ => FEEDBACK_NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
        assert_eq!(Action::from_name("action_listen"), None);
        assert!("utter_greet".parse::<Action>().is_err());
    }

    #[test]
    fn test_feedback_acknowledgement() {
        assert_eq!(feedback_acknowledgement(Some("positive")), FEEDBACK_POSITIVE);
        assert_eq!(feedback_acknowledgement(Some("negative")), FEEDBACK_NEGATIVE);
        assert_eq!(feedback_acknowledgement(Some("meh")), FEEDBACK_NEUTRAL);
        assert_eq!(feedback_acknowledgement(None), FEEDBACK_NEUTRAL);
    }
}
