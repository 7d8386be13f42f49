//! Check execution
//!
//! Runs the check sequence against a live backend, one request at a time.

use anyhow::Result;
use tracing::{debug, info};

use crate::checks::{
    self, AddFusionVisitCheck, AddVisitCheck, AddVisitInvalidCheck, ApiRootCheck,
    CountriesAggregateCheck, CountriesListCheck, CountryDetailsCheck, CountryDetailsInvalidCheck,
    CuisinesCheck, DeleteVisitCheck, InvalidRouteCheck, RestaurantsCheck, RestaurantsInvalidCheck,
    UpdateVisitCheck,
};
use crate::http::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::models::{Check, CheckResult, RunSummary};
use crate::utils::Timer;

/// Configuration for a check run
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RunConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Sequential check runner
pub struct CheckRunner {
    client: ApiClient,
}

impl CheckRunner {
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = ApiClient::with_timeout(&config.base_url, config.timeout_secs)?;
        Ok(Self { client })
    }

    /// Run a single check in isolation
    pub async fn run_check(&self, check: Check) -> CheckResult {
        let result = checks::run_check(&self.client, check).await;
        self.log_result(&result);
        result
    }

    /// Run the full check sequence in fixed order.
    ///
    /// The countries list feeds the details, restaurant, and visit checks;
    /// the created visit's id feeds the update and delete checks. When that
    /// data is unavailable, random identifiers stand in and the dependent
    /// checks may fail against a real backend.
    pub async fn run_all(&self) -> RunSummary {
        println!("🚀 Starting API checks for King Julien's World Cuisine Tour");
        println!("📍 Base URL: {}", self.client.base_url());
        println!("{}", "=".repeat(80));

        let timer = Timer::start();
        let mut results = Vec::with_capacity(Check::all().len());

        results.push(self.log(ApiRootCheck::new().run(&self.client).await));
        results.push(self.log(CountriesAggregateCheck::new().run(&self.client).await));

        let (list_result, countries) = CountriesListCheck::new().run(&self.client).await;
        results.push(self.log(list_result));
        debug!("Threading {} known countries into later checks", countries.len());

        let details = match countries.first() {
            Some(country) => CountryDetailsCheck::new(country.country_code.clone()),
            None => CountryDetailsCheck::new("US"),
        };
        results.push(self.log(details.run(&self.client).await));
        results.push(self.log(CountryDetailsInvalidCheck::new().run(&self.client).await));
        results.push(self.log(CuisinesCheck::new().run(&self.client).await));

        results.push(self.log(
            RestaurantsCheck::from_countries(&countries)
                .run(&self.client)
                .await,
        ));
        results.push(self.log(RestaurantsInvalidCheck::new().run(&self.client).await));

        let (add_result, visit_id) = AddVisitCheck::from_countries(&countries)
            .run(&self.client)
            .await;
        results.push(self.log(add_result));

        results.push(self.log(
            AddFusionVisitCheck::from_countries(&countries)
                .run(&self.client)
                .await,
        ));
        results.push(self.log(AddVisitInvalidCheck::new().run(&self.client).await));

        results.push(self.log(
            UpdateVisitCheck::new(visit_id.clone(), &countries)
                .run(&self.client)
                .await,
        ));
        results.push(self.log(DeleteVisitCheck::new(visit_id).run(&self.client).await));

        results.push(self.log(InvalidRouteCheck::new().run(&self.client).await));

        println!("{}", "=".repeat(80));

        let summary = RunSummary::new(results);
        info!(
            "Check run completed in {}ms - Pass: {}/{} ({:.1}%)",
            timer.elapsed_ms(),
            summary.passed,
            summary.total,
            summary.success_rate()
        );

        summary
    }

    fn log(&self, result: CheckResult) -> CheckResult {
        self.log_result(&result);
        result
    }

    /// Print the per-check progress line; dump the response body when a
    /// check did not pass
    fn log_result(&self, result: &CheckResult) {
        println!("{result}");

        if !result.is_success() {
            if let Some(data) = &result.response {
                let pretty = serde_json::to_string_pretty(data)
                    .unwrap_or_else(|_| data.to_string());
                println!("   Response: {pretty}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn run_config_builder() {
        let config = RunConfig::new("http://10.0.0.1:8080/api").with_timeout(5);
        assert_eq!(config.base_url, "http://10.0.0.1:8080/api");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn runner_creation() {
        let runner = CheckRunner::new(RunConfig::default());
        assert!(runner.is_ok());
    }
}
