// ABOUTME: HTTP route assembly for the Mealwise server
// ABOUTME: Merges action, turn, fulfillment, and health routes with tracing, timeout, and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! HTTP routes
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | POST | `/webhook` | dialogue-runtime custom-action endpoint |
//! | POST | `/api/turns` | local turn API with in-process sessions |
//! | POST | `/fulfillment` | bridge from a chat front end to the runtime |
//! | GET | `/health`, `/ready` | liveness and readiness |

/// Action webhook
pub mod actions;
/// Fulfillment bridge
pub mod fulfillment;
/// Health checks
pub mod health;
/// Local turn API
pub mod turns;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info_span;
use uuid::Uuid;

pub use actions::ActionRoutes;
pub use fulfillment::FulfillmentRoutes;
pub use health::HealthRoutes;
pub use turns::TurnRoutes;

use crate::resources::AssistantResources;

/// Request id header honored on inbound requests
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application router
pub fn router(resources: Arc<AssistantResources>) -> Router {
    let request_timeout = Duration::from_secs(resources.config.request_timeout_secs);

    Router::new()
        .merge(ActionRoutes::routes(Arc::clone(&resources)))
        .merge(TurnRoutes::routes(Arc::clone(&resources)))
        .merge(FulfillmentRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(CorsLayer::permissive())
}

/// Span for one HTTP request, keyed by the caller's request id or a fresh one
fn create_request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
