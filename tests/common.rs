// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, mock-backed resources, HTTP request helpers, and a dialogue runtime stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealwise_server`

use std::sync::{Arc, Once};

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use mealwise_server::{
    config::environment::{ProviderBackend, ServerConfig},
    intelligence::FixedFollowUp,
    pipeline::RecommendationPipeline,
    providers::{MockNutritionProvider, NutritionProvider},
    resources::AssistantResources,
    routes,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default configuration pointing at the mock provider
pub fn test_config() -> ServerConfig {
    ServerConfig {
        provider: ProviderBackend::Mock,
        ..ServerConfig::default()
    }
}

/// Pipeline over `provider` with a deterministic follow-up (first prompt)
pub fn pipeline_with(provider: &Arc<MockNutritionProvider>) -> RecommendationPipeline {
    init_test_logging();
    let resources = resources_with(provider);
    (*resources.pipeline).clone()
}

/// Resources over `provider` with a deterministic follow-up (first prompt)
pub fn resources_with(provider: &Arc<MockNutritionProvider>) -> Arc<AssistantResources> {
    resources_with_config(provider, test_config())
}

/// Resources over `provider` with an explicit configuration
pub fn resources_with_config(
    provider: &Arc<MockNutritionProvider>,
    config: ServerConfig,
) -> Arc<AssistantResources> {
    init_test_logging();
    let provider: Arc<dyn NutritionProvider> = provider.clone();
    Arc::new(AssistantResources::with_provider(
        config,
        provider,
        Arc::new(FixedFollowUp(0)),
    ))
}

/// Full application router over `provider`
pub fn app_with(provider: &Arc<MockNutritionProvider>) -> Router {
    routes::router(resources_with(provider))
}

/// Send a JSON request through `app` and decode the JSON reply
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json)?)
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

/// Convenience POST
pub async fn post_json(app: Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send_json(app, Method::POST, uri, Some(body)).await
}

/// Start a dialogue runtime stub answering every POST with `status` and `reply`
///
/// Returns the webhook URL and a handle recording received bodies.
pub async fn spawn_runtime_stub(
    status: StatusCode,
    reply: Value,
) -> Result<(String, Arc<tokio::sync::Mutex<Vec<Value>>>)> {
    let received = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let recorder = Arc::clone(&received);

    let app = Router::new().route(
        "/webhooks/rest/webhook",
        post(move |Json(body): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            let reply = reply.clone();
            async move {
                recorder.lock().await.push(body);
                (status, Json(reply))
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{addr}/webhooks/rest/webhook"), received))
}
