// ABOUTME: Main library entry point for the Mealwise meal-recommendation assistant
// ABOUTME: Wires the recommendation pipeline to dialogue actions and HTTP surfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Server
//!
//! Conversational meal recommendations. A dialogue runtime classifies each
//! user turn and calls one of the assistant's actions; the action runs the
//! recommendation pipeline against a nutrition data provider and replies with
//! a ranked, deduplicated list of meals.
//!
//! ## Architecture
//!
//! - **Pipeline**: extraction, query composition, provider calls, aggregation
//!   and formatting for one turn ([`pipeline`])
//! - **Actions**: the dialogue-runtime actions dispatched by name ([`actions`])
//! - **Conversation**: preference access through runtime slots or the
//!   in-process session store ([`conversation`])
//! - **Routes**: action webhook, local turn API, fulfillment bridge, health
//!   ([`routes`])
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealwise_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Mealwise configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Dialogue-runtime actions
pub mod actions;

/// Environment configuration
pub mod config;

/// Shared constants
pub mod constants;

/// Preference accessors and session state
pub mod conversation;

/// Error types
pub mod errors;

/// Clients for services outside the nutrition provider
pub mod external;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Recommendation pipeline
pub mod pipeline;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

pub use mealwise_intelligence as intelligence;
pub use mealwise_providers as providers;
