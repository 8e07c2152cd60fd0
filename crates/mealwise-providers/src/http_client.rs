// ABOUTME: Shared HTTP client with connection pooling for outbound calls
// ABOUTME: Timeouts are configured once at startup and apply to every provider request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{error, warn};

use crate::constants::defaults::{PROVIDER_CONNECT_TIMEOUT_SECS, PROVIDER_TIMEOUT_SECS};

/// Configured (request, connect) timeouts for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Set the shared client timeouts
///
/// Call once at startup before the first provider request. Later calls are
/// ignored; without a call the provider defaults (10s / 5s) apply.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Request timeout the shared client was (or will be) built with
#[must_use]
pub fn configured_timeout_secs() -> u64 {
    CLIENT_TIMEOUTS
        .get()
        .map_or(PROVIDER_TIMEOUT_SECS, |(timeout, _)| *timeout)
}

/// Shared HTTP client for provider and dialogue-runtime calls
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((PROVIDER_TIMEOUT_SECS, PROVIDER_CONNECT_TIMEOUT_SECS));
        build_client(timeout, connect_timeout)
    })
}

/// Build a standalone client with explicit timeouts
///
/// Used where a caller needs a timeout different from the shared one. If the
/// full builder fails, a minimal builder still carries the request timeout;
/// only when that fails too does an unbounded default client come back, and
/// that is logged as an error.
#[must_use]
pub fn build_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    let timeout = Duration::from_secs(timeout_secs);
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .or_else(|e| {
            warn!("Failed to build HTTP client with configured timeouts, retrying minimal builder: {e}");
            ClientBuilder::new().timeout(timeout).build()
        })
        .unwrap_or_else(|e| {
            error!("Failed to build bounded HTTP client, provider requests have no timeout: {e}");
            Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_built_client_enforces_request_timeout() {
        // Accepts connections via the backlog but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let started = std::time::Instant::now();
        let err = build_client(1, 1).get(url).send().await.unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }

    #[test]
    fn test_configured_timeout_defaults() {
        assert!(configured_timeout_secs() > 0);
    }
}
