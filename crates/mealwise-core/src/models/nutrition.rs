// ABOUTME: Nutrition data model: nutrient values, provider records, and meal candidates
// ABOUTME: Defines the explicit "unknown" sentinel, ranking priority, and excluded categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;

/// A nutrient amount reported by the provider, or the explicit absence of one
///
/// `Unknown` is distinct from `Known(0.0)`: it displays as `unknown` and only
/// counts as zero when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum NutrientValue {
    /// Amount reported by the provider
    Known(f64),
    /// Field absent or null in the provider payload
    #[default]
    Unknown,
}

impl NutrientValue {
    /// Build from an optional provider field
    #[must_use]
    pub fn from_option(value: Option<f64>) -> Self {
        value
            .filter(|amount| amount.is_finite())
            .map_or(Self::Unknown, Self::Known)
    }

    /// Numeric value used for ranking (unknown ranks as zero)
    #[must_use]
    pub const fn sort_value(self) -> f64 {
        match self {
            Self::Known(amount) => amount,
            Self::Unknown => 0.0,
        }
    }

    /// Whether the provider reported this value
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(amount) if amount.fract().abs() < f64::EPSILON => write!(f, "{amount:.1}"),
            Self::Known(amount) => write!(f, "{amount}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Food entry returned by the provider search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFoodItem {
    /// Food name exactly as the provider spelled it
    pub food_name: String,
}

impl RawFoodItem {
    /// Create a raw item
    #[must_use]
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
        }
    }
}

/// Nutrient lookup record for one food
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientRecord {
    /// Food name as returned by the provider
    pub food_name: String,
    /// Energy in kcal
    pub calories: NutrientValue,
    /// Protein in grams
    pub protein: NutrientValue,
    /// Total carbohydrate in grams
    pub carbs: NutrientValue,
    /// Total fat in grams
    pub fat: NutrientValue,
}

/// Deduplicated, nutrient-annotated meal eligible for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCandidate {
    /// Title-cased food name
    pub name: String,
    /// Energy in kcal
    pub calories: NutrientValue,
    /// Protein in grams
    pub protein: NutrientValue,
    /// Total carbohydrate in grams
    pub carbs: NutrientValue,
    /// Total fat in grams
    pub fat: NutrientValue,
}

impl MealCandidate {
    /// Value of the nutrient used for ranking
    #[must_use]
    pub const fn nutrient(&self, priority: NutrientPriority) -> NutrientValue {
        match priority {
            NutrientPriority::Calories => self.calories,
            NutrientPriority::Protein => self.protein,
            NutrientPriority::Carbs => self.carbs,
            NutrientPriority::Fat => self.fat,
        }
    }
}

/// Nutrient used to rank meal candidates (highest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientPriority {
    /// Rank by energy
    Calories,
    /// Rank by protein content
    #[default]
    Protein,
    /// Rank by carbohydrate content
    Carbs,
    /// Rank by fat content
    Fat,
}

impl NutrientPriority {
    /// Configuration name of this priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl FromStr for NutrientPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "energy" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "carbs" | "carbohydrates" => Ok(Self::Carbs),
            "fat" => Ok(Self::Fat),
            other => Err(AppError::config_invalid(format!(
                "Invalid nutrient priority '{other}'. Must be: calories, protein, carbs, fat"
            ))),
        }
    }
}

/// Nutrient labels the lookup call sometimes returns as if they were foods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcludedCategory {
    /// "protein"
    Protein,
    /// "carbs"
    Carbs,
    /// "fiber"
    Fiber,
    /// "fats"
    Fats,
    /// "iron"
    Iron,
    /// "omega-3"
    Omega3,
    /// "sodium"
    Sodium,
    /// "sugar"
    Sugar,
}

impl ExcludedCategory {
    /// Every excluded category
    pub const ALL: [Self; 8] = [
        Self::Protein,
        Self::Carbs,
        Self::Fiber,
        Self::Fats,
        Self::Iron,
        Self::Omega3,
        Self::Sodium,
        Self::Sugar,
    ];

    /// Lowercase label as it appears in provider payloads
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fiber => "fiber",
            Self::Fats => "fats",
            Self::Iron => "iron",
            Self::Omega3 => "omega-3",
            Self::Sodium => "sodium",
            Self::Sugar => "sugar",
        }
    }

    /// Match a food name against the labels, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.label() == normalized)
    }
}

/// Set of categories filtered out of nutrient lookup results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedCategorySet {
    categories: Vec<ExcludedCategory>,
}

impl ExcludedCategorySet {
    /// The full non-meal label set
    #[must_use]
    pub fn standard() -> Self {
        Self {
            categories: ExcludedCategory::ALL.to_vec(),
        }
    }

    /// A custom subset
    #[must_use]
    pub fn from_categories(categories: impl IntoIterator<Item = ExcludedCategory>) -> Self {
        let mut unique = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self { categories: unique }
    }

    /// Whether a food name names one of the excluded categories
    #[must_use]
    pub fn excludes(&self, food_name: &str) -> bool {
        ExcludedCategory::from_name(food_name)
            .is_some_and(|category| self.categories.contains(&category))
    }

    /// Number of categories in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the set excludes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for ExcludedCategorySet {
    fn default() -> Self {
        Self::standard()
    }
}
