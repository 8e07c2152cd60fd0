// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Response texts, follow-up prompt pool, slot/intent names, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// User-facing response texts
pub mod messages {
    /// Header line preceding the rendered meal list
    pub const MEAL_OPTIONS_HEADER: &str = "Here are some meal options:";
    /// Returned when search or lookup produced no usable meal candidates
    pub const CLARIFICATION_PROMPT: &str =
        "I'm not sure about that food item. Can you specify more details?";
    /// Returned when the provider search call fails
    pub const SEARCH_FAILURE: &str = "Sorry, I couldn't fetch meal suggestions at the moment.";
    /// Returned when the provider nutrient lookup fails
    pub const NUTRIENT_LOOKUP_FAILURE: &str = "Sorry, I couldn't fetch nutrition details.";
    /// Returned for an empty utterance while no preference is known
    pub const EMPTY_TURN_PROMPT: &str =
        "Please tell me your food preferences, or I can suggest general healthy meals!";
    /// Returned when a preference declaration names no known diet
    pub const PREFERENCE_NOT_RECOGNIZED: &str =
        "I couldn't recognize a diet preference. Are you vegan, keto, etc.?";
    /// Feedback acknowledgement for `positive`
    pub const FEEDBACK_POSITIVE: &str = "Glad you liked it! Need more suggestions?";
    /// Feedback acknowledgement for `negative`
    pub const FEEDBACK_NEGATIVE: &str = "Sorry about that. Want another recommendation?";
    /// Feedback acknowledgement for anything else
    pub const FEEDBACK_NEUTRAL: &str = "Thanks for your feedback!";
    /// Fulfillment bridge reply when the request carries no text
    pub const INVALID_FULFILLMENT_REQUEST: &str = "Invalid request. No user message received.";

    /// Confirmation uttered after a preference is stored
    #[must_use]
    pub fn preference_confirmation(preference: &str, recommendation: &str) -> String {
        format!("Got it! You prefer {preference}. I'll suggest meals accordingly.\n{recommendation}")
    }
}

/// Follow-up prompts appended while no diet preference is known
pub const FOLLOW_UP_PROMPTS: &[&str] = &[
    "Do you have any dietary preferences? 🍽️ (e.g., vegan, keto) Let me know so I can tailor my recommendations!",
    "What kind of meals do you prefer?",
];

/// Keyword and query defaults
pub mod queries {
    /// Fallback keyword string and fallback query
    pub const DEFAULT_QUERY: &str = "healthy meal";
    /// Keyword override for weight-loss goals
    pub const LOW_CALORIE: &str = "low calorie";
    /// Keyword override for weight-gain goals
    pub const HIGH_CALORIE: &str = "high calorie";
    /// Phrases forcing [`LOW_CALORIE`]
    pub const WEIGHT_LOSS_PHRASES: &[&str] = &["weight loss", "weight-loss"];
    /// Phrases forcing [`HIGH_CALORIE`]
    pub const WEIGHT_GAIN_PHRASES: &[&str] = &["weight gain", "weight-gain"];
}

/// Conversation slot names owned by the dialogue runtime
pub mod slots {
    /// Stored diet preference
    pub const USER_PREFERENCE: &str = "user_preference";
    /// Feedback classification (`positive` / `negative`)
    pub const FEEDBACK_TYPE: &str = "feedback_type";
}

/// Intent labels recognized by the dialogue runtime
pub mod intents {
    /// User declares a diet preference
    pub const DIET_PREFERENCE: &str = "diet_preference";
}

/// Service names for structured logging
pub mod service_names {
    /// Server binary service name
    pub const MEALWISE_SERVER: &str = "mealwise-server";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port (action endpoint, bridge, health)
    pub const HTTP_PORT: u16 = 5055;
    /// Unique search names forwarded to nutrient lookup
    pub const MAX_MEAL_SUGGESTIONS: usize = 5;
    /// Provider request timeout
    pub const PROVIDER_TIMEOUT_SECS: u64 = 10;
    /// Provider connect timeout
    pub const PROVIDER_CONNECT_TIMEOUT_SECS: u64 = 5;
    /// Nutritionix API base URL
    pub const NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";
    /// REST webhook of the dialogue runtime
    pub const DIALOGUE_RUNTIME_URL: &str = "http://localhost:5005/webhooks/rest/webhook";
    /// Sender name used by the fulfillment bridge
    pub const BRIDGE_SENDER: &str = "user";
    /// Upper bound for a whole HTTP request handled by this server
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Turn-API sessions untouched this long may be evicted
    pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 1800;
    /// Session count above which idle sessions are swept
    pub const SESSION_CLEANUP_THRESHOLD: usize = 1000;
}
