// ABOUTME: Diet preference vocabulary with a fixed, documented match precedence
// ABOUTME: Tags serialize as their kebab-case vocabulary terms (e.g. "gluten-free")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Session-scoped dietary tag extracted from user text
///
/// Declaration order is the match precedence: when a text mentions several
/// terms, the earliest variant in [`DietPreference::ALL`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Ketogenic
    Keto,
    /// No gluten-containing ingredients
    GlutenFree,
    /// Paleo-compliant
    Paleo,
    /// No dairy products
    DairyFree,
    /// Reduced carbohydrates
    LowCarb,
    /// Protein-forward meals
    HighProtein,
    /// Calorie-restricted meals
    WeightLoss,
}

impl DietPreference {
    /// Every tag, in match precedence order
    pub const ALL: [Self; 9] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Keto,
        Self::GlutenFree,
        Self::Paleo,
        Self::DairyFree,
        Self::LowCarb,
        Self::HighProtein,
        Self::WeightLoss,
    ];

    /// Vocabulary term for this tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Keto => "keto",
            Self::GlutenFree => "gluten-free",
            Self::Paleo => "paleo",
            Self::DairyFree => "dairy-free",
            Self::LowCarb => "low-carb",
            Self::HighProtein => "high-protein",
            Self::WeightLoss => "weight-loss",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown diet preference '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_vocabulary_terms() {
        for tag in DietPreference::ALL {
            assert_eq!(tag.as_str().parse::<DietPreference>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            " Gluten-Free ".parse::<DietPreference>().unwrap(),
            DietPreference::GlutenFree
        );
        assert!("carnivore".parse::<DietPreference>().is_err());
    }

    #[test]
    fn test_serde_uses_vocabulary_terms() {
        let json = serde_json::to_string(&DietPreference::HighProtein).unwrap();
        assert_eq!(json, "\"high-protein\"");
        let tag: DietPreference = serde_json::from_str("\"dairy-free\"").unwrap();
        assert_eq!(tag, DietPreference::DairyFree);
    }
}
