// ABOUTME: Core trait for nutrition data providers used by the recommendation pipeline
// ABOUTME: Defines the search and nutrient-lookup contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use async_trait::async_trait;

use crate::errors::provider::ProviderResult;
use crate::models::{NutrientRecord, RawFoodItem};

/// External nutrition data source
///
/// Implementations perform exactly one round-trip per call. Callers never
/// see a panic or an unbounded wait: every failure is a `ProviderError`.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Provider name for logging (e.g. "nutritionix", "mock")
    fn name(&self) -> &'static str;

    /// Search foods matching `query`, in provider order
    async fn search(&self, query: &str) -> ProviderResult<Vec<RawFoodItem>>;

    /// Look up nutrients for `food_names`
    ///
    /// Absent fields come back as `NutrientValue::Unknown`.
    async fn lookup_nutrients(&self, food_names: &[String]) -> ProviderResult<Vec<NutrientRecord>>;
}
