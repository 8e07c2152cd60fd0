// ABOUTME: Fulfillment webhook bridging a chat front end to the dialogue runtime
// ABOUTME: Forwards the query text and relays the runtime's first reply verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Fulfillment bridge
//!
//! Failures on the runtime side are absorbed here: the caller always gets a
//! `fulfillmentText`, empty when the runtime could not answer.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::messages::INVALID_FULFILLMENT_REQUEST;
use crate::logging::AssistantLogger;
use crate::resources::AssistantResources;

/// Fulfillment webhook request
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FulfillmentRequest {
    /// Parsed query
    #[serde(default, rename = "queryResult")]
    pub query_result: QueryResult,
}

/// Query section of a fulfillment request
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QueryResult {
    /// Raw user text
    #[serde(default, rename = "queryText")]
    pub query_text: String,
}

/// Fulfillment webhook response
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FulfillmentResponse {
    /// Text shown to the user
    #[serde(rename = "fulfillmentText")]
    pub fulfillment_text: String,
}

/// Fulfillment bridge routes
pub struct FulfillmentRoutes;

impl FulfillmentRoutes {
    /// Create the fulfillment route
    pub fn routes(resources: Arc<AssistantResources>) -> Router {
        Router::new()
            .route("/fulfillment", post(Self::fulfill))
            .with_state(resources)
    }

    async fn fulfill(
        State(resources): State<Arc<AssistantResources>>,
        Json(request): Json<FulfillmentRequest>,
    ) -> Json<FulfillmentResponse> {
        let query = request.query_result.query_text.trim();
        if query.is_empty() {
            return Json(FulfillmentResponse {
                fulfillment_text: INVALID_FULFILLMENT_REQUEST.to_owned(),
            });
        }

        let fulfillment_text = match resources.runtime.first_reply(query).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("Dialogue runtime returned no text reply");
                String::new()
            }
            Err(e) => {
                AssistantLogger::log_runtime_failure(resources.runtime.url(), &e.to_string());
                String::new()
            }
        };

        Json(FulfillmentResponse { fulfillment_text })
    }
}
