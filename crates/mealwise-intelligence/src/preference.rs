// ABOUTME: Diet preference extraction from raw user text
// ABOUTME: Lowercased substring matching against the fixed vocabulary with declared precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use crate::models::DietPreference;

/// Maps raw text to at most one diet preference tag
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceExtractor;

impl PreferenceExtractor {
    /// Create an extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Detect a diet preference in `text`
    ///
    /// Matching is case-insensitive substring containment. When several
    /// vocabulary terms occur, the first one in [`DietPreference::ALL`] order
    /// is returned.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<DietPreference> {
        let lowered = text.to_lowercase();
        DietPreference::ALL
            .into_iter()
            .find(|tag| lowered.contains(tag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_vocabulary_term() {
        let extractor = PreferenceExtractor::new();
        for tag in DietPreference::ALL {
            let text = format!("I'm {tag} these days");
            assert_eq!(extractor.extract(&text), Some(tag), "failed for {tag}");
        }
    }

    #[test]
    fn test_is_case_insensitive() {
        let extractor = PreferenceExtractor::new();
        assert_eq!(extractor.extract("I'm VEGAN"), Some(DietPreference::Vegan));
        assert_eq!(
            extractor.extract("Gluten-Free please"),
            Some(DietPreference::GlutenFree)
        );
    }

    #[test]
    fn test_no_term_yields_none() {
        let extractor = PreferenceExtractor::new();
        assert_eq!(extractor.extract("I like pizza"), None);
        assert_eq!(extractor.extract(""), None);
        // Spaced variants are not vocabulary terms
        assert_eq!(extractor.extract("low carb"), None);
    }

    #[test]
    fn test_overlapping_terms_follow_precedence() {
        let extractor = PreferenceExtractor::new();
        assert_eq!(
            extractor.extract("keto but also vegan"),
            Some(DietPreference::Vegan)
        );
        assert_eq!(
            extractor.extract("weight-loss and high-protein"),
            Some(DietPreference::HighProtein)
        );
    }
}
