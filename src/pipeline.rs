// ABOUTME: Recommendation pipeline for one conversation turn
// ABOUTME: Query composition, provider search and lookup, aggregation, and reply formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Recommendation Pipeline
//!
//! One pipeline serves every action. Steps run strictly in sequence:
//!
//! 1. compose the query from the stored preference and the keywords
//! 2. provider search (one attempt)
//! 3. pick up to `max_suggestions` unique, title-cased names
//! 4. provider nutrient lookup for those names (one attempt)
//! 5. filter, deduplicate and rank
//! 6. format the reply
//!
//! Provider failures never escape: each maps to a fixed user-facing text
//! through [`RecommendationFailure::user_message`].

use std::sync::Arc;
use std::time::Instant;

use mealwise_intelligence::{
    select_search_names, KeywordExtractor, QueryComposer, ResponseFormatter, ResultAggregator,
};
use mealwise_providers::{NutritionProvider, ProviderError};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::constants::defaults::MAX_MEAL_SUGGESTIONS;
use crate::constants::messages::{
    CLARIFICATION_PROMPT, EMPTY_TURN_PROMPT, NUTRIENT_LOOKUP_FAILURE, SEARCH_FAILURE,
};
use crate::logging::AssistantLogger;
use crate::models::{DietPreference, MealCandidate};

/// Locally handled pipeline failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendationFailure {
    /// Provider search failed
    #[error("meal search failed")]
    SearchFailure(#[source] ProviderError),
    /// Provider nutrient lookup failed
    #[error("nutrient lookup failed")]
    NutrientLookupFailure(#[source] ProviderError),
    /// Calls succeeded but no usable meal remained
    #[error("no usable meal candidates")]
    EmptyResultSet,
}

impl RecommendationFailure {
    /// Text shown to the user for this failure
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::SearchFailure(_) => SEARCH_FAILURE,
            Self::NutrientLookupFailure(_) => NUTRIENT_LOOKUP_FAILURE,
            Self::EmptyResultSet => CLARIFICATION_PROMPT,
        }
    }
}

/// Inputs for one recommendation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    /// Latest user utterance (used for the empty-turn check)
    pub utterance: String,
    /// Stored preference
    pub preference: Option<DietPreference>,
    /// Extracted keywords, if any
    pub keywords: Option<String>,
}

impl RecommendationRequest {
    /// Request for a free-text food turn; keywords come from the utterance
    ///
    /// A blank utterance carries no keywords.
    #[must_use]
    pub fn from_utterance(
        utterance: &str,
        preference: Option<DietPreference>,
        extractor: &KeywordExtractor,
    ) -> Self {
        let keywords = (!utterance.trim().is_empty()).then(|| extractor.extract(utterance));
        Self {
            utterance: utterance.to_owned(),
            preference,
            keywords,
        }
    }

    /// Request for a preference-declaration turn: the query is the tag alone
    #[must_use]
    pub fn for_declared_preference(utterance: &str, preference: DietPreference) -> Self {
        Self {
            utterance: utterance.to_owned(),
            preference: Some(preference),
            keywords: None,
        }
    }

    /// Nothing typed and nothing known about the user
    #[must_use]
    pub fn is_empty_turn(&self) -> bool {
        self.utterance.trim().is_empty() && self.preference.is_none()
    }
}

/// Recommendation pipeline shared by all actions
#[derive(Clone)]
pub struct RecommendationPipeline {
    provider: Arc<dyn NutritionProvider>,
    keywords: KeywordExtractor,
    composer: QueryComposer,
    aggregator: ResultAggregator,
    formatter: ResponseFormatter,
    max_suggestions: usize,
}

impl RecommendationPipeline {
    /// Pipeline with default ranking, random follow-ups, and five suggestions
    #[must_use]
    pub fn new(provider: Arc<dyn NutritionProvider>) -> Self {
        Self {
            provider,
            keywords: KeywordExtractor::new(),
            composer: QueryComposer::new(),
            aggregator: ResultAggregator::default(),
            formatter: ResponseFormatter::default(),
            max_suggestions: MAX_MEAL_SUGGESTIONS,
        }
    }

    /// Replace the aggregator (exclusions and ranking key)
    #[must_use]
    pub fn with_aggregator(mut self, aggregator: ResultAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Replace the formatter (follow-up source)
    #[must_use]
    pub fn with_formatter(mut self, formatter: ResponseFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set how many unique names go to nutrient lookup
    #[must_use]
    pub const fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Keyword extractor used for free-text turns
    #[must_use]
    pub const fn keyword_extractor(&self) -> &KeywordExtractor {
        &self.keywords
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run the pipeline and render the reply text
    ///
    /// Never fails: provider errors and empty results become fixed texts.
    pub async fn recommend(&self, request: &RecommendationRequest) -> String {
        if request.is_empty_turn() {
            debug!("Empty turn without preference, prompting for preferences");
            return EMPTY_TURN_PROMPT.to_owned();
        }

        match self
            .candidates(request.preference, request.keywords.as_deref())
            .await
        {
            Ok(candidates) => self
                .formatter
                .format(&candidates, request.preference.is_some()),
            Err(failure) => failure.user_message().to_owned(),
        }
    }

    /// Ranked candidates for the composed query
    ///
    /// # Errors
    ///
    /// Returns a [`RecommendationFailure`] when a provider call fails or no
    /// usable meal remains.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn candidates(
        &self,
        preference: Option<DietPreference>,
        keywords: Option<&str>,
    ) -> Result<Vec<MealCandidate>, RecommendationFailure> {
        let started = Instant::now();
        let query = self.composer.compose(preference, keywords);
        info!(query = %query, "Searching meals");

        let items = self.provider.search(&query).await.map_err(|e| {
            AssistantLogger::log_provider_failure(self.provider.name(), "search", &e.to_string());
            RecommendationFailure::SearchFailure(e)
        })?;

        let names = select_search_names(&items, self.max_suggestions);
        debug!(hits = items.len(), selected = ?names, "Search names selected");
        if names.is_empty() {
            return Err(RecommendationFailure::EmptyResultSet);
        }

        let records = self.provider.lookup_nutrients(&names).await.map_err(|e| {
            AssistantLogger::log_provider_failure(
                self.provider.name(),
                "nutrients",
                &e.to_string(),
            );
            RecommendationFailure::NutrientLookupFailure(e)
        })?;

        let candidates = self.aggregator.aggregate(&records);
        AssistantLogger::log_recommendation(
            &query,
            candidates.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        if candidates.is_empty() {
            return Err(RecommendationFailure::EmptyResultSet);
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_texts_are_distinct() {
        let error = ProviderError::Timeout {
            operation: "search",
            seconds: 10,
        };
        let search = RecommendationFailure::SearchFailure(error.clone());
        let lookup = RecommendationFailure::NutrientLookupFailure(error);

        assert_ne!(search.user_message(), lookup.user_message());
        assert_eq!(
            RecommendationFailure::EmptyResultSet.user_message(),
            CLARIFICATION_PROMPT
        );
    }

    #[test]
    fn test_request_from_blank_utterance_has_no_keywords() {
        let extractor = KeywordExtractor::new();
        let request =
            RecommendationRequest::from_utterance("   ", Some(DietPreference::Vegan), &extractor);
        assert_eq!(request.keywords, None);
        assert!(!request.is_empty_turn());

        let request = RecommendationRequest::from_utterance("", None, &extractor);
        assert!(request.is_empty_turn());
    }

    #[test]
    fn test_request_from_utterance_extracts_keywords() {
        let extractor = KeywordExtractor::new();
        let request =
            RecommendationRequest::from_utterance("spicy tofu please", None, &extractor);
        assert_eq!(request.keywords.as_deref(), Some("spicy tofu"));
    }
}
