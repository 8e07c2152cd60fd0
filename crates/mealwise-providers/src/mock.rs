// ABOUTME: In-memory nutrition provider for tests and offline runs (no API calls)
// ABOUTME: Canned search and lookup data, failure injection, and call recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::core::NutritionProvider;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{NutrientRecord, NutrientValue, RawFoodItem};

/// One recorded provider invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// `search(query)`
    Search(String),
    /// `lookup_nutrients(names)`
    LookupNutrients(Vec<String>),
}

/// Mock provider returning canned data
///
/// Lookup answers with every configured record whose name matches one of the
/// requested names (case-insensitively), in configured order.
#[derive(Debug, Default)]
pub struct MockNutritionProvider {
    search_results: Vec<RawFoodItem>,
    records: Vec<NutrientRecord>,
    search_error: Option<ProviderError>,
    lookup_error: Option<ProviderError>,
    echo_all_records: bool,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockNutritionProvider {
    /// Empty provider: search finds nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider preloaded with a small chicken/tofu catalogue
    #[must_use]
    pub fn sample() -> Self {
        Self::new()
            .with_search_results(["chicken breast", "Chicken Breast", "tofu"])
            .with_records(vec![
                record("chicken breast", Some(165.0), Some(31.02), Some(0.0), Some(3.57)),
                record("tofu", Some(144.0), Some(17.3), Some(2.8), None),
            ])
    }

    /// Set the names returned by `search`
    #[must_use]
    pub fn with_search_results<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_results = names.into_iter().map(RawFoodItem::new).collect();
        self
    }

    /// Set the records available to `lookup_nutrients`
    #[must_use]
    pub fn with_records(mut self, records: Vec<NutrientRecord>) -> Self {
        self.records = records;
        self
    }

    /// Return every configured record from lookup regardless of requested names
    ///
    /// Mirrors the provider answering with entries it parsed out of the query
    /// text (e.g. a bare `protein` nutrient).
    #[must_use]
    pub const fn echo_all_records(mut self) -> Self {
        self.echo_all_records = true;
        self
    }

    /// Make `search` fail with `error`
    #[must_use]
    pub fn failing_search(mut self, error: ProviderError) -> Self {
        self.search_error = Some(error);
        self
    }

    /// Make `lookup_nutrients` fail with `error`
    #[must_use]
    pub fn failing_lookup(mut self, error: ProviderError) -> Self {
        self.lookup_error = Some(error);
        self
    }

    /// All calls received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names passed to each lookup call
    #[must_use]
    pub fn lookup_requests(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ProviderCall::LookupNutrients(names) => Some(names),
                ProviderCall::Search(_) => None,
            })
            .collect()
    }

    /// Queries passed to each search call
    #[must_use]
    pub fn search_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ProviderCall::Search(query) => Some(query),
                ProviderCall::LookupNutrients(_) => None,
            })
            .collect()
    }

    fn record_call(&self, call: ProviderCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl NutritionProvider for MockNutritionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, query: &str) -> ProviderResult<Vec<RawFoodItem>> {
        self.record_call(ProviderCall::Search(query.to_owned()));
        if let Some(error) = &self.search_error {
            return Err(error.clone());
        }
        Ok(self.search_results.clone())
    }

    async fn lookup_nutrients(&self, food_names: &[String]) -> ProviderResult<Vec<NutrientRecord>> {
        self.record_call(ProviderCall::LookupNutrients(food_names.to_vec()));
        if let Some(error) = &self.lookup_error {
            return Err(error.clone());
        }
        if self.echo_all_records {
            return Ok(self.records.clone());
        }
        Ok(self
            .records
            .iter()
            .filter(|record| {
                food_names
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(record.food_name.trim()))
            })
            .cloned()
            .collect())
    }
}

/// Build a nutrient record from optional amounts
#[must_use]
pub fn record(
    food_name: &str,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
) -> NutrientRecord {
    NutrientRecord {
        food_name: food_name.to_owned(),
        calories: NutrientValue::from_option(calories),
        protein: NutrientValue::from_option(protein),
        carbs: NutrientValue::from_option(carbs),
        fat: NutrientValue::from_option(fat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_lookup_matches_case_insensitively() {
        let provider = MockNutritionProvider::sample();
        let records = provider
            .lookup_nutrients(&["Chicken Breast".to_owned()])
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].protein, NutrientValue::Known(31.02));
    }

    #[tokio::test]
    async fn test_calls_are_recorded_in_order() {
        let provider = MockNutritionProvider::sample();
        provider.search("tofu").await.unwrap();
        provider.lookup_nutrients(&["Tofu".to_owned()]).await.unwrap();

        assert_eq!(provider.search_queries(), vec!["tofu".to_owned()]);
        assert_eq!(provider.lookup_requests(), vec![vec!["Tofu".to_owned()]]);
        assert_eq!(provider.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let provider = MockNutritionProvider::sample().failing_search(ProviderError::Timeout {
            operation: "search",
            seconds: 10,
        });
        assert!(matches!(
            provider.search("anything").await,
            Err(ProviderError::Timeout { .. })
        ));
    }
}
