// ABOUTME: Core types and constants for the Mealwise meal recommendation assistant
// ABOUTME: Foundation crate with error handling, diet/nutrition models, and response texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! assistant. The intelligence and provider crates build on these types, and
//! the server crate re-exports them.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Fixed response texts, vocabularies, and configuration defaults
//! - **models**: Diet preferences, nutrient records, meal candidates, conversation state

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`DietPreference`, `MealCandidate`, `ConversationState`, etc.)
pub mod models;
