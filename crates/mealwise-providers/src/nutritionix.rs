// ABOUTME: Nutritionix API client implementing the nutrition provider contract
// ABOUTME: Instant search plus natural-language nutrient lookup with bounded, non-retried requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutritionix API client
//!
//! Two endpoints are used:
//!
//! - `GET {base}/search/instant?query=...` returns `common` and `branded`
//!   food groups; only `common` is read, branded products never reach lookup.
//! - `POST {base}/natural/nutrients` with `{"query": "a, b, c"}` returns one
//!   `foods` entry per recognized food.
//!
//! Credentials go in the `x-app-id` / `x-app-key` headers. Each call is one
//! attempt; a timeout, transport error, non-success status or malformed body
//! becomes a [`ProviderError`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::constants::defaults::{NUTRITIONIX_BASE_URL, PROVIDER_TIMEOUT_SECS};
use crate::core::NutritionProvider;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{NutrientRecord, NutrientValue, RawFoodItem};

const PROVIDER_NAME: &str = "nutritionix";
const SEARCH_OPERATION: &str = "search";
const NUTRIENTS_OPERATION: &str = "nutrients";

/// Error bodies longer than this are cut before logging
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Nutritionix client configuration
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    /// Application id (`x-app-id`)
    pub app_id: Option<String>,
    /// Application key (`x-app-key`)
    pub app_key: Option<String>,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Request timeout, reported in timeout errors
    pub timeout_secs: u64,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: NUTRITIONIX_BASE_URL.to_owned(),
            timeout_secs: PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl NutritionixConfig {
    /// Whether both credentials are present and non-blank
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.app_id) && present(&self.app_key)
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    common: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
struct SearchFood {
    #[serde(default)]
    food_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NutrientsResponse {
    #[serde(default)]
    foods: Vec<NutrientsFood>,
}

#[derive(Debug, Deserialize)]
struct NutrientsFood {
    #[serde(default)]
    food_name: Option<String>,
    #[serde(default)]
    nf_calories: Option<f64>,
    #[serde(default)]
    nf_protein: Option<f64>,
    #[serde(default)]
    nf_total_carbohydrate: Option<f64>,
    #[serde(default)]
    nf_total_fat: Option<f64>,
}

/// Nutritionix API client
pub struct NutritionixClient {
    config: NutritionixConfig,
    http_client: Client,
}

impl NutritionixClient {
    /// Client using the process-wide shared HTTP client
    #[must_use]
    pub fn new(config: NutritionixConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Client using an explicit HTTP client
    #[must_use]
    pub const fn with_client(config: NutritionixConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &NutritionixConfig {
        &self.config
    }

    fn credentials(&self) -> ProviderResult<(&str, &str)> {
        match (
            self.config.app_id.as_deref().map(str::trim),
            self.config.app_key.as_deref().map(str::trim),
        ) {
            (Some(app_id), Some(app_key)) if !app_id.is_empty() && !app_key.is_empty() => {
                Ok((app_id, app_key))
            }
            _ => Err(ProviderError::NotConfigured {
                provider: PROVIDER_NAME,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn transport_error(&self, operation: &'static str, error: &reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout {
                operation,
                seconds: self.config.timeout_secs,
            }
        } else {
            ProviderError::Network {
                operation,
                message: error.to_string(),
            }
        }
    }

    /// Check status and read the body as text
    async fn read_body(&self, operation: &'static str, response: Response) -> ProviderResult<String> {
        let status = response.status();
        debug!(provider = PROVIDER_NAME, operation, %status, "Provider response received");

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(operation, &e))?;

        if !status.is_success() {
            warn!(
                provider = PROVIDER_NAME,
                operation,
                status = status.as_u16(),
                body_length = body.len(),
                "Provider request failed"
            );
            return Err(ProviderError::HttpStatus {
                operation,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl NutritionProvider for NutritionixClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, query: &str) -> ProviderResult<Vec<RawFoodItem>> {
        let (app_id, app_key) = self.credentials()?;

        let response = self
            .http_client
            .get(self.endpoint("search/instant"))
            .query(&[("query", query)])
            .header("x-app-id", app_id)
            .header("x-app-key", app_key)
            .send()
            .await
            .map_err(|e| self.transport_error(SEARCH_OPERATION, &e))?;

        let body = self.read_body(SEARCH_OPERATION, response).await?;
        parse_search_response(&body)
    }

    async fn lookup_nutrients(&self, food_names: &[String]) -> ProviderResult<Vec<NutrientRecord>> {
        if food_names.is_empty() {
            return Ok(Vec::new());
        }
        let (app_id, app_key) = self.credentials()?;

        let response = self
            .http_client
            .post(self.endpoint("natural/nutrients"))
            .header("x-app-id", app_id)
            .header("x-app-key", app_key)
            .json(&json!({ "query": food_names.join(", ") }))
            .send()
            .await
            .map_err(|e| self.transport_error(NUTRIENTS_OPERATION, &e))?;

        let body = self.read_body(NUTRIENTS_OPERATION, response).await?;
        parse_nutrients_response(&body)
    }
}

/// Decode an instant-search payload into raw items from the `common` group
///
/// # Errors
/// Returns `ProviderError::Parse` for a body that is not a search object.
pub fn parse_search_response(body: &str) -> ProviderResult<Vec<RawFoodItem>> {
    let parsed: SearchResponse = serde_json::from_str(body).map_err(|e| ProviderError::Parse {
        operation: SEARCH_OPERATION,
        message: e.to_string(),
    })?;

    Ok(parsed
        .common
        .into_iter()
        .filter_map(|food| food.food_name)
        .map(RawFoodItem::new)
        .collect())
}

/// Decode a natural-nutrients payload into records
///
/// Entries without a name are dropped; absent or null nutrient fields become
/// `NutrientValue::Unknown`.
///
/// # Errors
/// Returns `ProviderError::Parse` for a body that is not a nutrients object.
pub fn parse_nutrients_response(body: &str) -> ProviderResult<Vec<NutrientRecord>> {
    let parsed: NutrientsResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse {
            operation: NUTRIENTS_OPERATION,
            message: e.to_string(),
        })?;

    Ok(parsed
        .foods
        .into_iter()
        .filter_map(|food| {
            Some(NutrientRecord {
                food_name: food.food_name?,
                calories: NutrientValue::from_option(food.nf_calories),
                protein: NutrientValue::from_option(food.nf_protein),
                carbs: NutrientValue::from_option(food.nf_total_carbohydrate),
                fat: NutrientValue::from_option(food.nf_total_fat),
            })
        })
        .collect())
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_owned()
    } else {
        let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push_str("...");
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_ignores_branded_group() {
        let body = r#"{
            "common": [{"food_name": "chicken breast"}, {"food_name": "tofu"}],
            "branded": [{"food_name": "Chicken Strips", "brand_name": "Acme"}]
        }"#;
        let items = parse_search_response(body).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.food_name.as_str()).collect();
        assert_eq!(names, vec!["chicken breast", "tofu"]);
    }

    #[test]
    fn test_branded_only_payload_yields_nothing() {
        let body = r#"{
            "common": [],
            "branded": [{"food_name": "Acme Chicken Nuggets"}, {"food_name": "Store Chicken Wrap"}]
        }"#;
        assert!(parse_search_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_tolerates_missing_groups() {
        assert!(parse_search_response("{}").unwrap().is_empty());
        let items = parse_search_response(r#"{"common": [{"photo": {}}]}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_search_rejects_malformed_body() {
        let err = parse_search_response("<html>").unwrap_err();
        assert!(matches!(err, ProviderError::Parse { operation: "search", .. }));
    }

    #[test]
    fn test_parse_nutrients_marks_missing_fields_unknown() {
        let body = r#"{"foods": [
            {"food_name": "chicken breast", "nf_calories": 165, "nf_protein": 31.02,
             "nf_total_carbohydrate": 0, "nf_total_fat": 3.57},
            {"food_name": "tofu", "nf_calories": 144, "nf_protein": null},
            {"nf_calories": 10}
        ]}"#;
        let records = parse_nutrients_response(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].calories, NutrientValue::Known(165.0));
        assert_eq!(records[0].carbs, NutrientValue::Known(0.0));
        assert_eq!(records[1].protein, NutrientValue::Unknown);
        assert_eq!(records[1].fat, NutrientValue::Unknown);
    }

    #[test]
    fn test_parse_nutrients_rejects_wrong_shape() {
        let err = parse_nutrients_response(r#"{"foods": 3}"#).unwrap_err();
        assert_eq!(err.operation(), Some("nutrients"));
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let cut = truncate_body(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY_CHARS + 3);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn test_credentials_required() {
        let blank = NutritionixConfig {
            app_id: Some("id".to_owned()),
            app_key: Some("  ".to_owned()),
            ..NutritionixConfig::default()
        };
        assert!(!blank.has_credentials());
        assert!(!NutritionixConfig::default().has_credentials());
    }

    #[tokio::test]
    async fn test_missing_credentials_short_circuit() {
        let client = NutritionixClient::with_client(NutritionixConfig::default(), Client::new());
        let err = client.search("tofu").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::NotConfigured {
                provider: "nutritionix"
            }
        );
    }

    #[tokio::test]
    async fn test_empty_lookup_makes_no_request() {
        let client = NutritionixClient::with_client(NutritionixConfig::default(), Client::new());
        assert!(client.lookup_nutrients(&[]).await.unwrap().is_empty());
    }
}
