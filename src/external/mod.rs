// ABOUTME: Clients for external services other than the nutrition provider
// ABOUTME: Currently the dialogue runtime's REST webhook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Dialogue runtime REST webhook client
pub mod dialogue_runtime;

pub use dialogue_runtime::{DialogueRuntimeClient, RuntimeMessage};
