// ABOUTME: Domain models re-exported from the core crate
// ABOUTME: Diet preferences, nutrient values, meal candidates, and conversation state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub use mealwise_core::models::*;
