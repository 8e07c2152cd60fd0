// ABOUTME: Server binary for the Mealwise meal-recommendation assistant
// ABOUTME: Loads configuration, initializes logging and the HTTP client, and serves all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Mealwise Server Binary
//!
//! Serves the dialogue-runtime action endpoint, the local turn API, the
//! fulfillment bridge and health checks on one port.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mealwise_server::{
    config::environment::ServerConfig, logging, providers::initialize_shared_client,
    resources::AssistantResources, routes,
};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "mealwise-server")]
#[command(about = "Mealwise - conversational meal recommendations")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    info!("{}", config.summary());

    // Must run before the first provider request builds the shared client
    initialize_shared_client(
        config.provider_timeout_secs,
        config.provider_connect_timeout_secs,
    );

    let port = config.http_port;
    let resources = Arc::new(AssistantResources::from_config(config));
    let app = routes::router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    display_available_endpoints(port);
    info!("Ready to serve meal recommendations");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Action Webhook:    POST http://{host}:{port}/webhook");
    info!("   Turn API:          POST http://{host}:{port}/api/turns");
    info!("   Fulfillment:       POST http://{host}:{port}/fulfillment");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
