// ABOUTME: Composes the provider search query from stored preference and extracted keywords
// ABOUTME: Precedence: preference + keywords, preference, keywords, then "healthy meal"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use crate::constants::queries::DEFAULT_QUERY;
use crate::models::DietPreference;

/// Merges preference and keywords into one search string
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryComposer;

impl QueryComposer {
    /// Create a composer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the search query
    ///
    /// Blank keyword strings count as absent.
    #[must_use]
    pub fn compose(&self, preference: Option<DietPreference>, keywords: Option<&str>) -> String {
        let keywords = keywords.map(str::trim).filter(|k| !k.is_empty());

        match (preference, keywords) {
            (Some(preference), Some(keywords)) => format!("{preference} {keywords}"),
            (Some(preference), None) => preference.as_str().to_owned(),
            (None, Some(keywords)) => keywords.to_owned(),
            (None, None) => DEFAULT_QUERY.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        let composer = QueryComposer::new();
        assert_eq!(
            composer.compose(Some(DietPreference::Keto), Some("chicken")),
            "keto chicken"
        );
        assert_eq!(composer.compose(Some(DietPreference::Vegan), None), "vegan");
        assert_eq!(composer.compose(None, Some("tofu bowl")), "tofu bowl");
        assert_eq!(composer.compose(None, None), "healthy meal");
    }

    #[test]
    fn test_blank_keywords_are_absent() {
        let composer = QueryComposer::new();
        assert_eq!(
            composer.compose(Some(DietPreference::Paleo), Some("   ")),
            "paleo"
        );
        assert_eq!(composer.compose(None, Some("")), "healthy meal");
    }

    #[test]
    fn test_idempotent() {
        let composer = QueryComposer::new();
        let first = composer.compose(Some(DietPreference::LowCarb), Some("salmon"));
        let second = composer.compose(Some(DietPreference::LowCarb), Some("salmon"));
        assert_eq!(first, second);
        assert_eq!(first, "low-carb salmon");
    }
}
