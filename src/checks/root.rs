//! Core and error-path checks
//!
//! Covers the API root welcome endpoint and the unknown-route 404 behavior.

use tracing::info;

use crate::http::ApiClient;
use crate::models::{Check, CheckResult};

/// Check 1: API root returns the product welcome message
#[derive(Clone, Debug, Default)]
pub struct ApiRootCheck;

impl ApiRootCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::ApiRoot);

        let resp = match client.get("/").await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::ApiRoot, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::ApiRoot,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(Check::ApiRoot, format!("Invalid JSON response: {e}"))
            }
        };

        let message = data.get("message").and_then(|m| m.as_str()).unwrap_or("");
        if message.contains("King Julien") {
            CheckResult::pass(
                Check::ApiRoot,
                resp.duration_ms,
                "API root endpoint responding correctly",
            )
            .with_response(data)
        } else {
            CheckResult::fail(Check::ApiRoot, resp.duration_ms, "Unexpected welcome message")
                .with_response(data)
        }
    }
}

/// Check 14: unknown routes under the API base return 404 with an error body
#[derive(Clone, Debug, Default)]
pub struct InvalidRouteCheck;

impl InvalidRouteCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::InvalidRoute);

        let resp = match client.get("/nonexistent").await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::InvalidRoute, e.to_string()),
        };

        if resp.status_code != 404 {
            return CheckResult::fail(
                Check::InvalidRoute,
                resp.duration_ms,
                format!(
                    "Expected 404 but got HTTP {}: {}",
                    resp.status_code,
                    resp.body_excerpt()
                ),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::InvalidRoute,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        if data.get("error").is_some() {
            CheckResult::pass(
                Check::InvalidRoute,
                resp.duration_ms,
                "Correctly returned 404 for unknown route",
            )
            .with_response(data)
        } else {
            CheckResult::fail(
                Check::InvalidRoute,
                resp.duration_ms,
                "404 response missing error field",
            )
            .with_response(data)
        }
    }
}
