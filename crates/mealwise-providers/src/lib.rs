// ABOUTME: Nutrition data provider implementations for the Mealwise assistant
// ABOUTME: Core provider trait, Nutritionix HTTP client, shared HTTP client, and a mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition data provider boundary.
//!
//! The recommendation pipeline depends only on [`NutritionProvider`]: a search
//! call followed by a nutrient lookup. Each call is a single round-trip with a
//! bounded timeout and no retry; failures come back as [`ProviderError`].

// Re-export core modules so provider code can keep `use crate::errors::*` etc.
pub use mealwise_core::constants;
pub use mealwise_core::errors;
pub use mealwise_core::models;

/// Core provider trait
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// In-memory provider for tests and offline runs
pub mod mock;
/// Nutritionix API client
pub mod nutritionix;

pub use self::core::NutritionProvider;
pub use http_client::{
    build_client, configured_timeout_secs, initialize_shared_client, shared_client,
};
pub use mealwise_core::errors::provider::{ProviderError, ProviderResult};
pub use mock::{record, MockNutritionProvider, ProviderCall};
pub use nutritionix::{
    parse_nutrients_response, parse_search_response, NutritionixClient, NutritionixConfig,
};
