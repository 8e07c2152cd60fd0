// ABOUTME: Recommendation decision logic for the Mealwise assistant
// ABOUTME: Preference/keyword extraction, query composition, aggregation, and response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! Pure functions and small structs that turn a user utterance into a
//! provider query and turn provider records into the text shown to the user.
//! Nothing in this crate performs I/O; the only non-determinism (follow-up
//! prompt selection) sits behind the [`FollowUpSource`] trait.
//!
//! ## Flow
//!
//! ```text
//! utterance ─► PreferenceExtractor ─┐
//!           └► KeywordExtractor ────┴► QueryComposer ─► (provider search)
//!                                                         │
//!              select_search_names ◄──────────────────────┘
//!                     │
//!              (provider nutrient lookup) ─► ResultAggregator ─► ResponseFormatter
//! ```

// Re-export core modules so callers can reach shared types through this crate
pub use mealwise_core::constants;
pub use mealwise_core::models;

/// Aggregation, deduplication, and ranking of provider records
pub mod aggregation;
/// Response rendering and follow-up prompt selection
pub mod formatter;
/// Food keyword extraction with part-of-speech filtering
pub mod keywords;
/// Diet preference extraction
pub mod preference;
/// Search query composition
pub mod query;
/// Text normalization helpers
pub mod text;

pub use aggregation::{select_search_names, ResultAggregator};
pub use formatter::{
    render_candidate, FixedFollowUp, FollowUpSource, RandomFollowUp, ResponseFormatter,
    SeededFollowUp,
};
pub use keywords::{KeywordExtractor, PartOfSpeech};
pub use preference::PreferenceExtractor;
pub use query::QueryComposer;
pub use text::title_case;
