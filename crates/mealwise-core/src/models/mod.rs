// ABOUTME: Core data models shared across the Mealwise crates
// ABOUTME: Re-exports diet, nutrition, and conversation state types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Diet preference vocabulary
pub mod diet;
/// Nutrient values, provider records, and meal candidates
pub mod nutrition;
/// Per-session conversation state
pub mod conversation;

pub use conversation::ConversationState;
pub use diet::DietPreference;
pub use nutrition::{
    ExcludedCategory, ExcludedCategorySet, MealCandidate, NutrientPriority, NutrientRecord,
    NutrientValue, RawFoodItem,
};
