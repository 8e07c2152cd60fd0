// ABOUTME: Environment configuration for the Mealwise server
// ABOUTME: Parses ports, provider credentials, timeouts, and ranking settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Environment-based configuration
//!
//! Every value has a default except the provider credentials. Missing
//! credentials are not a startup error: the Nutritionix client reports
//! `NotConfigured` on first use and the pipeline answers with its search
//! failure text.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use mealwise_providers::NutritionixConfig;
use tracing::{info, warn};

use crate::constants::{defaults, env_keys};
use crate::models::NutrientPriority;

/// Which nutrition provider backs the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderBackend {
    /// Live Nutritionix API
    #[default]
    Nutritionix,
    /// Built-in sample catalogue, no network
    Mock,
}

impl FromStr for ProviderBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nutritionix" => Ok(Self::Nutritionix),
            "mock" => Ok(Self::Mock),
            other => bail!("Unknown nutrition provider '{other}' (expected nutritionix or mock)"),
        }
    }
}

impl fmt::Display for ProviderBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nutritionix => f.write_str("nutritionix"),
            Self::Mock => f.write_str("mock"),
        }
    }
}

/// Nutritionix connection settings
#[derive(Debug, Clone)]
pub struct NutritionixSettings {
    /// `x-app-id` credential
    pub app_id: Option<String>,
    /// `x-app-key` credential
    pub app_key: Option<String>,
    /// API base URL
    pub base_url: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port for every HTTP surface
    pub http_port: u16,
    /// Provider backend
    pub provider: ProviderBackend,
    /// Nutritionix settings
    pub nutritionix: NutritionixSettings,
    /// Per-request provider timeout
    pub provider_timeout_secs: u64,
    /// Provider connect timeout
    pub provider_connect_timeout_secs: u64,
    /// REST webhook of the dialogue runtime, used by the fulfillment bridge
    pub dialogue_runtime_url: String,
    /// Ranking nutrient
    pub nutrient_priority: NutrientPriority,
    /// Unique search names forwarded to nutrient lookup
    pub max_meal_suggestions: usize,
    /// Upper bound for one inbound HTTP request
    pub request_timeout_secs: u64,
    /// Idle time after which a turn-API session may be evicted
    pub session_idle_timeout_secs: u64,
    /// Session count above which idle sessions are swept
    pub session_cleanup_threshold: usize,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            provider: ProviderBackend::default(),
            nutritionix: NutritionixSettings {
                app_id: None,
                app_key: None,
                base_url: defaults::NUTRITIONIX_BASE_URL.to_owned(),
            },
            provider_timeout_secs: defaults::PROVIDER_TIMEOUT_SECS,
            provider_connect_timeout_secs: defaults::PROVIDER_CONNECT_TIMEOUT_SECS,
            dialogue_runtime_url: defaults::DIALOGUE_RUNTIME_URL.to_owned(),
            nutrient_priority: NutrientPriority::default(),
            max_meal_suggestions: defaults::MAX_MEAL_SUGGESTIONS,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            session_idle_timeout_secs: defaults::SESSION_IDLE_TIMEOUT_SECS,
            session_cleanup_threshold: defaults::SESSION_CLEANUP_THRESHOLD,
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value does not parse, the nutrient
    /// priority or provider backend is unknown, or validation fails.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            provider: env_var_or(env_keys::NUTRITION_PROVIDER, "nutritionix").parse()?,
            nutritionix: NutritionixSettings {
                app_id: optional_env_var(env_keys::NUTRITIONIX_APP_ID),
                app_key: optional_env_var(env_keys::NUTRITIONIX_APP_KEY),
                base_url: env_var_or(env_keys::NUTRITIONIX_BASE_URL, defaults::NUTRITIONIX_BASE_URL),
            },
            provider_timeout_secs: env_var_or(
                env_keys::PROVIDER_TIMEOUT_SECS,
                &defaults::PROVIDER_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid PROVIDER_TIMEOUT_SECS value")?,
            provider_connect_timeout_secs: env_var_or(
                env_keys::PROVIDER_CONNECT_TIMEOUT_SECS,
                &defaults::PROVIDER_CONNECT_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid PROVIDER_CONNECT_TIMEOUT_SECS value")?,
            dialogue_runtime_url: env_var_or(
                env_keys::DIALOGUE_RUNTIME_URL,
                defaults::DIALOGUE_RUNTIME_URL,
            ),
            nutrient_priority: env_var_or(env_keys::MEAL_NUTRIENT_PRIORITY, "protein")
                .parse()
                .context("Invalid MEAL_NUTRIENT_PRIORITY value")?,
            max_meal_suggestions: env_var_or(
                env_keys::MAX_MEAL_SUGGESTIONS,
                &defaults::MAX_MEAL_SUGGESTIONS.to_string(),
            )
            .parse()
            .context("Invalid MAX_MEAL_SUGGESTIONS value")?,
            request_timeout_secs: env_var_or(
                env_keys::REQUEST_TIMEOUT_SECS,
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            session_idle_timeout_secs: env_var_or(
                env_keys::SESSION_IDLE_TIMEOUT_SECS,
                &defaults::SESSION_IDLE_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid SESSION_IDLE_TIMEOUT_SECS value")?,
            session_cleanup_threshold: env_var_or(
                env_keys::SESSION_CLEANUP_THRESHOLD,
                &defaults::SESSION_CLEANUP_THRESHOLD.to_string(),
            )
            .parse()
            .context("Invalid SESSION_CLEANUP_THRESHOLD value")?,
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error for zero timeouts or a zero suggestion limit.
    pub fn validate(&self) -> Result<()> {
        if self.provider_timeout_secs == 0 {
            bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
        }
        if self.provider_connect_timeout_secs == 0 {
            bail!("PROVIDER_CONNECT_TIMEOUT_SECS must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.max_meal_suggestions == 0 {
            bail!("MAX_MEAL_SUGGESTIONS must be greater than zero");
        }

        if self.provider == ProviderBackend::Nutritionix && !self.nutritionix_config().has_credentials()
        {
            warn!(
                "Nutritionix credentials missing: set NUTRITIONIX_APP_ID and NUTRITIONIX_APP_KEY"
            );
        }

        Ok(())
    }

    /// Client configuration for the Nutritionix provider
    #[must_use]
    pub fn nutritionix_config(&self) -> NutritionixConfig {
        NutritionixConfig {
            app_id: self.nutritionix.app_id.clone(),
            app_key: self.nutritionix.app_key.clone(),
            base_url: self.nutritionix.base_url.clone(),
            timeout_secs: self.provider_timeout_secs,
        }
    }

    /// Human-readable configuration summary (credentials redacted)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mealwise Server Configuration:\n\
             - HTTP Port: {}\n\
             - Nutrition Provider: {}\n\
             - Nutritionix Credentials: {}\n\
             - Nutritionix Base URL: {}\n\
             - Provider Timeout: {}s (connect {}s)\n\
             - Dialogue Runtime: {}\n\
             - Nutrient Priority: {}\n\
             - Max Meal Suggestions: {}\n\
             - Session Idle Timeout: {}s (sweep above {} sessions)\n\
             - Version: {}",
            self.http_port,
            self.provider,
            if self.nutritionix_config().has_credentials() {
                "Configured"
            } else {
                "Missing"
            },
            self.nutritionix.base_url,
            self.provider_timeout_secs,
            self.provider_connect_timeout_secs,
            self.dialogue_runtime_url,
            self.nutrient_priority.as_str(),
            self.max_meal_suggestions,
            self.session_idle_timeout_secs,
            self.session_cleanup_threshold,
            self.server_version,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Non-blank environment variable
fn optional_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_backend_parsing() {
        assert_eq!(
            "Mock".parse::<ProviderBackend>().unwrap(),
            ProviderBackend::Mock
        );
        assert_eq!(
            " nutritionix ".parse::<ProviderBackend>().unwrap(),
            ProviderBackend::Nutritionix
        );
        assert!("usda".parse::<ProviderBackend>().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http_port, 5055);
        assert_eq!(config.nutrient_priority, NutrientPriority::Protein);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = ServerConfig {
            max_meal_suggestions: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            provider_timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_redacts_credentials() {
        let mut config = ServerConfig::default();
        config.nutritionix.app_id = Some("app-id-123".to_owned());
        config.nutritionix.app_key = Some("secret-key".to_owned());

        let summary = config.summary();
        assert!(summary.contains("Nutritionix Credentials: Configured"));
        assert!(!summary.contains("secret-key"));
        assert_eq!(config.nutritionix_config().timeout_secs, 10);
    }
}
