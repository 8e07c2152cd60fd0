// ABOUTME: Shared resource container handed to every HTTP route
// ABOUTME: Builds the provider, pipeline, session store, and runtime client from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::Arc;
use std::time::Duration;

use mealwise_intelligence::{FollowUpSource, RandomFollowUp, ResponseFormatter, ResultAggregator};
use mealwise_providers::{
    shared_client, MockNutritionProvider, NutritionProvider, NutritionixClient,
};
use tracing::info;

use crate::config::environment::{ProviderBackend, ServerConfig};
use crate::conversation::SessionStore;
use crate::external::DialogueRuntimeClient;
use crate::models::ExcludedCategorySet;
use crate::pipeline::RecommendationPipeline;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct AssistantResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Recommendation pipeline shared by all actions
    pub pipeline: Arc<RecommendationPipeline>,
    /// Session state for the local turn API
    pub sessions: Arc<SessionStore>,
    /// Dialogue runtime client for the fulfillment bridge
    pub runtime: Arc<DialogueRuntimeClient>,
}

impl AssistantResources {
    /// Build resources from configuration, choosing the provider backend
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let provider: Arc<dyn NutritionProvider> = match config.provider {
            ProviderBackend::Nutritionix => {
                Arc::new(NutritionixClient::new(config.nutritionix_config()))
            }
            ProviderBackend::Mock => Arc::new(MockNutritionProvider::sample()),
        };
        info!(provider = provider.name(), "Nutrition provider selected");
        Self::with_provider(config, provider, Arc::new(RandomFollowUp))
    }

    /// Build resources around an explicit provider and follow-up source
    #[must_use]
    pub fn with_provider(
        config: ServerConfig,
        provider: Arc<dyn NutritionProvider>,
        follow_ups: Arc<dyn FollowUpSource>,
    ) -> Self {
        let pipeline = RecommendationPipeline::new(provider)
            .with_aggregator(ResultAggregator::new(
                ExcludedCategorySet::standard(),
                config.nutrient_priority,
            ))
            .with_formatter(ResponseFormatter::new(follow_ups))
            .with_max_suggestions(config.max_meal_suggestions);

        let runtime = DialogueRuntimeClient::new(
            config.dialogue_runtime_url.clone(),
            shared_client().clone(),
        );

        let sessions = SessionStore::with_limits(
            Duration::from_secs(config.session_idle_timeout_secs),
            config.session_cleanup_threshold,
        );

        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            sessions: Arc::new(sessions),
            runtime: Arc::new(runtime),
        }
    }
}
