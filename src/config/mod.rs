// ABOUTME: Configuration module entry point
// ABOUTME: Environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Environment-based server configuration
pub mod environment;

pub use environment::{ProviderBackend, ServerConfig};
