// ABOUTME: Constants re-exported from the core crate for in-crate use
// ABOUTME: Response texts, slot names, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub use mealwise_core::constants::*;

/// Environment variable names read by the server configuration
pub mod env_keys {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Nutritionix application id
    pub const NUTRITIONIX_APP_ID: &str = "NUTRITIONIX_APP_ID";
    /// Nutritionix application key
    pub const NUTRITIONIX_APP_KEY: &str = "NUTRITIONIX_APP_KEY";
    /// Nutritionix base URL
    pub const NUTRITIONIX_BASE_URL: &str = "NUTRITIONIX_BASE_URL";
    /// Provider backend (`nutritionix` or `mock`)
    pub const NUTRITION_PROVIDER: &str = "NUTRITION_PROVIDER";
    /// Provider request timeout in seconds
    pub const PROVIDER_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";
    /// Provider connect timeout in seconds
    pub const PROVIDER_CONNECT_TIMEOUT_SECS: &str = "PROVIDER_CONNECT_TIMEOUT_SECS";
    /// Dialogue runtime REST webhook
    pub const DIALOGUE_RUNTIME_URL: &str = "DIALOGUE_RUNTIME_URL";
    /// Ranking nutrient
    pub const MEAL_NUTRIENT_PRIORITY: &str = "MEAL_NUTRIENT_PRIORITY";
    /// Names forwarded to nutrient lookup
    pub const MAX_MEAL_SUGGESTIONS: &str = "MAX_MEAL_SUGGESTIONS";
    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Idle time before a turn-API session may be evicted
    pub const SESSION_IDLE_TIMEOUT_SECS: &str = "SESSION_IDLE_TIMEOUT_SECS";
    /// Session count that triggers an idle sweep
    pub const SESSION_CLEANUP_THRESHOLD: &str = "SESSION_CLEANUP_THRESHOLD";
}
