// ABOUTME: Client for the dialogue runtime's REST webhook used by the fulfillment bridge
// ABOUTME: Posts the user message and extracts the first reply text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::defaults::BRIDGE_SENDER;
use crate::errors::{AppError, AppResult};

const SERVICE_NAME: &str = "dialogue runtime";

/// Message posted to the runtime
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeMessage<'a> {
    /// Conversation sender id
    pub sender: &'a str,
    /// User text
    pub message: &'a str,
}

/// One reply object from the runtime; non-text replies carry no `text`
#[derive(Debug, Clone, Deserialize)]
struct RuntimeReply {
    #[serde(default)]
    text: Option<String>,
}

/// REST webhook client for the dialogue runtime
#[derive(Debug, Clone)]
pub struct DialogueRuntimeClient {
    url: String,
    http_client: Client,
}

impl DialogueRuntimeClient {
    /// Client posting to `url`
    #[must_use]
    pub fn new(url: impl Into<String>, http_client: Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }

    /// Webhook URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `message` and return the first reply's text, if the first reply has one
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` when the runtime is unreachable, answers
    /// with a non-success status, or sends an undecodable body.
    pub async fn first_reply(&self, message: &str) -> AppResult<Option<String>> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&RuntimeMessage {
                sender: BRIDGE_SENDER,
                message,
            })
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        debug!(%status, "Dialogue runtime responded");
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        let replies: Vec<RuntimeReply> = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        Ok(replies.into_iter().next().and_then(|reply| reply.text))
    }
}
