// ABOUTME: Aggregation of provider results into ranked, deduplicated meal candidates
// ABOUTME: Search-name selection, excluded-category filtering, and stable nutrient ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Result Aggregation
//!
//! Two steps of the pipeline live here:
//!
//! 1. [`select_search_names`] picks which search hits go to nutrient lookup:
//!    title-cased, unique under case-insensitive comparison, provider order,
//!    truncated *after* deduplication.
//! 2. [`ResultAggregator::aggregate`] turns lookup records into meal
//!    candidates: drop excluded nutrient labels, keep the first record per
//!    name, then stable-sort descending by the configured nutrient.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{
    ExcludedCategorySet, MealCandidate, NutrientPriority, NutrientRecord, RawFoodItem,
};
use crate::text::{name_key, title_case};

/// Pick up to `limit` unique, title-cased food names from search results
#[must_use]
pub fn select_search_names(items: &[RawFoodItem], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for item in items {
        if names.len() == limit {
            break;
        }
        let name = title_case(&item.food_name);
        if name.is_empty() {
            continue;
        }
        if seen.insert(name_key(&name)) {
            names.push(name);
        }
    }

    names
}

/// Builds the ranked candidate list from nutrient lookup records
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    excluded: ExcludedCategorySet,
    priority: NutrientPriority,
}

impl ResultAggregator {
    /// Aggregator with the given exclusions and ranking key
    #[must_use]
    pub const fn new(excluded: ExcludedCategorySet, priority: NutrientPriority) -> Self {
        Self { excluded, priority }
    }

    /// Ranking key in use
    #[must_use]
    pub const fn priority(&self) -> NutrientPriority {
        self.priority
    }

    /// Deduplicate, filter, and rank nutrient records
    #[must_use]
    pub fn aggregate(&self, records: &[NutrientRecord]) -> Vec<MealCandidate> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(records.len());

        for record in records {
            let name = title_case(&record.food_name);
            if name.is_empty() || self.excluded.excludes(&name) {
                debug!(food = %record.food_name, "Skipping non-meal lookup record");
                continue;
            }
            if !seen.insert(name_key(&name)) {
                continue;
            }
            candidates.push(MealCandidate {
                name,
                calories: record.calories,
                protein: record.protein,
                carbs: record.carbs,
                fat: record.fat,
            });
        }

        let priority = self.priority;
        // slice::sort_by is stable: equal values keep first-seen order
        candidates.sort_by(|a, b| {
            b.nutrient(priority)
                .sort_value()
                .total_cmp(&a.nutrient(priority).sort_value())
        });

        candidates
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new(ExcludedCategorySet::standard(), NutrientPriority::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientValue;

    fn record(name: &str, protein: Option<f64>) -> NutrientRecord {
        NutrientRecord {
            food_name: name.to_owned(),
            calories: NutrientValue::Known(100.0),
            protein: NutrientValue::from_option(protein),
            carbs: NutrientValue::Unknown,
            fat: NutrientValue::Known(1.5),
        }
    }

    #[test]
    fn test_search_names_dedup_before_truncation() {
        let items: Vec<RawFoodItem> = ["Chicken Breast", "chicken breast", "Tofu"]
            .into_iter()
            .map(RawFoodItem::new)
            .collect();

        assert_eq!(
            select_search_names(&items, 5),
            vec!["Chicken Breast".to_owned(), "Tofu".to_owned()]
        );
    }

    #[test]
    fn test_search_names_limit() {
        let items: Vec<RawFoodItem> = ["a", "A", "b", "c", "d", "e", "f", "g"]
            .into_iter()
            .map(RawFoodItem::new)
            .collect();

        assert_eq!(
            select_search_names(&items, 5),
            vec!["A", "B", "C", "D", "E"]
        );
        assert!(select_search_names(&items, 0).is_empty());
    }

    #[test]
    fn test_excluded_categories_removed() {
        let aggregator = ResultAggregator::default();
        let candidates = aggregator.aggregate(&[
            record("Protein", Some(99.0)),
            record("tofu", Some(8.0)),
            record("omega-3", Some(0.0)),
        ]);

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tofu"]);
    }

    #[test]
    fn test_first_seen_wins_on_duplicates() {
        let aggregator = ResultAggregator::default();
        let candidates = aggregator.aggregate(&[
            record("egg", Some(6.0)),
            record("EGG", Some(50.0)),
        ]);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].protein, NutrientValue::Known(6.0));
    }

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let aggregator = ResultAggregator::default();
        let candidates = aggregator.aggregate(&[
            record("rice", None),
            record("beans", Some(9.0)),
            record("lettuce", Some(0.0)),
            record("chicken", Some(31.0)),
            record("tempeh", Some(9.0)),
        ]);

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Beans", "Tempeh", "Rice", "Lettuce"]);
        // Unknown protein ranks as zero but still displays as unknown
        assert_eq!(candidates[3].protein, NutrientValue::Unknown);
    }

    #[test]
    fn test_configurable_priority() {
        let aggregator =
            ResultAggregator::new(ExcludedCategorySet::standard(), NutrientPriority::Fat);
        let mut low_fat = record("yogurt", Some(10.0));
        low_fat.fat = NutrientValue::Known(0.4);
        let candidates = aggregator.aggregate(&[low_fat, record("cheese", Some(7.0))]);

        assert_eq!(candidates[0].name, "Cheese");
        assert_eq!(aggregator.priority(), NutrientPriority::Fat);
    }
}
