// ABOUTME: Error type for calls against the external nutrition data provider
// ABOUTME: Distinguishes network, timeout, status, parse, and missing-credential failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use thiserror::Error;

/// Failure of a single nutrition provider round-trip
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connection refused, TLS)
    #[error("{operation} request failed: {message}")]
    Network {
        /// Provider operation that failed (`search` or `nutrients`)
        operation: &'static str,
        /// Underlying error text
        message: String,
    },

    /// Request exceeded the configured timeout
    #[error("{operation} request timed out after {seconds}s")]
    Timeout {
        /// Provider operation that failed
        operation: &'static str,
        /// Configured timeout
        seconds: u64,
    },

    /// Provider answered with a non-success HTTP status
    #[error("{operation} returned HTTP {status}: {body}")]
    HttpStatus {
        /// Provider operation that failed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Response payload could not be decoded
    #[error("{operation} returned a malformed payload: {message}")]
    Parse {
        /// Provider operation that failed
        operation: &'static str,
        /// Decoder error text
        message: String,
    },

    /// Credentials for the provider are missing
    #[error("{provider} credentials are not configured")]
    NotConfigured {
        /// Provider display name
        provider: &'static str,
    },
}

impl ProviderError {
    /// Provider operation associated with this failure, if any
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Network { operation, .. }
            | Self::Timeout { operation, .. }
            | Self::HttpStatus { operation, .. }
            | Self::Parse { operation, .. } => Some(*operation),
            Self::NotConfigured { .. } => None,
        }
    }
}

/// Result alias for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;
