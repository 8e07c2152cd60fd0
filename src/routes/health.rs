// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness and readiness endpoints with provider and session details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Health check routes for service monitoring
//!
//! `/health` answers as long as the process serves requests. `/ready` also
//! reports the active nutrition provider and the number of open sessions.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::constants::service_names;
use crate::resources::AssistantResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<AssistantResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    async fn health(State(resources): State<Arc<AssistantResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::MEALWISE_SERVER,
            "version": resources.config.server_version,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready(State(resources): State<Arc<AssistantResources>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "provider": resources.pipeline.provider_name(),
            "sessions": resources.sessions.len(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
