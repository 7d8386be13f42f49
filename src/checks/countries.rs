//! Country endpoint checks
//!
//! Covers the aggregate map view, the dropdown list, per-country details,
//! the missing-parameter rejection, and the cuisine list.

use serde_json::Value;
use tracing::{debug, info};

use crate::http::ApiClient;
use crate::models::{
    error_mentions_required, missing_fields, Check, CheckResult, Country, AGGREGATE_FIELDS,
    COUNTRY_LIST_FIELDS,
};

/// Check 2: per-country visit counts for map coloring
#[derive(Clone, Debug, Default)]
pub struct CountriesAggregateCheck;

impl CountriesAggregateCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::CountriesAggregate);

        let resp = match client.get("/aggregate").await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::CountriesAggregate, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::CountriesAggregate,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::CountriesAggregate,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        let entries = match data.as_array() {
            Some(entries) => entries,
            None => {
                return CheckResult::fail(
                    Check::CountriesAggregate,
                    resp.duration_ms,
                    "Response is not a list",
                )
                .with_response(data)
            }
        };

        // An empty backend is a valid state
        if entries.is_empty() {
            return CheckResult::pass(
                Check::CountriesAggregate,
                resp.duration_ms,
                "Empty countries list (valid response)",
            );
        }

        let missing = missing_fields(&entries[0], AGGREGATE_FIELDS);
        if missing.is_empty() {
            CheckResult::pass(
                Check::CountriesAggregate,
                resp.duration_ms,
                format!("Retrieved {} countries with visit counts", entries.len()),
            )
        } else {
            CheckResult::fail(
                Check::CountriesAggregate,
                resp.duration_ms,
                format!("Missing required fields: {missing:?}"),
            )
            .with_response(entries[0].clone())
        }
    }
}

/// Check 3: the full country list used by form dropdowns.
///
/// On success the parsed list is handed back so later checks can reuse real
/// country ids and codes.
#[derive(Clone, Debug, Default)]
pub struct CountriesListCheck;

impl CountriesListCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> (CheckResult, Vec<Country>) {
        info!("Running {}", Check::CountriesList);

        let resp = match client.get("/countries").await {
            Ok(resp) => resp,
            Err(e) => return (CheckResult::error(Check::CountriesList, e.to_string()), Vec::new()),
        };

        if resp.status_code != 200 {
            let result = CheckResult::fail(
                Check::CountriesList,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
            return (result, Vec::new());
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                let result = CheckResult::error(
                    Check::CountriesList,
                    format!("Invalid JSON response: {e}"),
                );
                return (result, Vec::new());
            }
        };

        let entries = match data.as_array() {
            Some(entries) => entries.clone(),
            None => {
                let result = CheckResult::fail(
                    Check::CountriesList,
                    resp.duration_ms,
                    "Response is not a list",
                )
                .with_response(data);
                return (result, Vec::new());
            }
        };

        if entries.is_empty() {
            let result = CheckResult::pass(
                Check::CountriesList,
                resp.duration_ms,
                "Empty countries list (valid response)",
            );
            return (result, Vec::new());
        }

        let missing = missing_fields(&entries[0], COUNTRY_LIST_FIELDS);
        if !missing.is_empty() {
            let result = CheckResult::fail(
                Check::CountriesList,
                resp.duration_ms,
                format!("Missing required fields: {missing:?}"),
            )
            .with_response(entries[0].clone());
            return (result, Vec::new());
        }

        match serde_json::from_value::<Vec<Country>>(Value::Array(entries)) {
            Ok(countries) => {
                debug!("Countries list carries {} entries", countries.len());
                let result = CheckResult::pass(
                    Check::CountriesList,
                    resp.duration_ms,
                    format!("Retrieved {} countries for dropdowns", countries.len()),
                );
                (result, countries)
            }
            Err(e) => {
                let result = CheckResult::fail(
                    Check::CountriesList,
                    resp.duration_ms,
                    format!("Country entries malformed: {e}"),
                );
                (result, Vec::new())
            }
        }
    }
}

/// Check 4: country details with its visit history
#[derive(Clone, Debug)]
pub struct CountryDetailsCheck {
    pub country_code: String,
}

impl CountryDetailsCheck {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {} (code={})", Check::CountryDetails, self.country_code);

        let path = format!("/country?code={}", self.country_code);
        let resp = match client.get(&path).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::CountryDetails, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::CountryDetails,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::CountryDetails,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        let (country, visits) = match (data.get("country"), data.get("visits")) {
            (Some(country), Some(visits)) => (country, visits),
            _ => {
                return CheckResult::fail(
                    Check::CountryDetails,
                    resp.duration_ms,
                    "Response missing 'country' or 'visits' fields",
                )
                .with_response(data)
            }
        };

        let missing = missing_fields(country, COUNTRY_LIST_FIELDS);
        if !missing.is_empty() {
            return CheckResult::fail(
                Check::CountryDetails,
                resp.duration_ms,
                format!("Country object missing required fields: {missing:?}"),
            )
            .with_response(data.clone());
        }

        let name = country.get("name").and_then(Value::as_str).unwrap_or("?");
        let visit_count = visits.as_array().map(|v| v.len()).unwrap_or(0);
        CheckResult::pass(
            Check::CountryDetails,
            resp.duration_ms,
            format!("Retrieved details for {name} with {visit_count} visits"),
        )
    }
}

/// Check 5: country details without a code parameter is rejected
#[derive(Clone, Debug, Default)]
pub struct CountryDetailsInvalidCheck;

impl CountryDetailsInvalidCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::CountryDetailsInvalid);
        run_required_param_check(client, Check::CountryDetailsInvalid, "/country").await
    }
}

/// Check 6: distinct cuisines for the form dropdown
#[derive(Clone, Debug, Default)]
pub struct CuisinesCheck;

impl CuisinesCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::Cuisines);

        let resp = match client.get("/cuisines").await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::Cuisines, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::Cuisines,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(Check::Cuisines, format!("Invalid JSON response: {e}"))
            }
        };

        match data.as_array() {
            Some(entries) => CheckResult::pass(
                Check::Cuisines,
                resp.duration_ms,
                format!("Retrieved {} cuisines", entries.len()),
            ),
            None => CheckResult::fail(Check::Cuisines, resp.duration_ms, "Response is not a list")
                .with_response(data),
        }
    }
}

/// Shared negative-path assertion: GET `path` must yield 400 with an error
/// message mentioning the required parameter.
pub(crate) async fn run_required_param_check(
    client: &ApiClient,
    check: Check,
    path: &str,
) -> CheckResult {
    let resp = match client.get(path).await {
        Ok(resp) => resp,
        Err(e) => return CheckResult::error(check, e.to_string()),
    };

    if resp.status_code != 400 {
        return CheckResult::fail(
            check,
            resp.duration_ms,
            format!(
                "Expected 400 but got HTTP {}: {}",
                resp.status_code,
                resp.body_excerpt()
            ),
        );
    }

    let data = match resp.json() {
        Ok(data) => data,
        Err(e) => return CheckResult::error(check, format!("Invalid JSON response: {e}")),
    };

    if error_mentions_required(&data) {
        CheckResult::pass(
            check,
            resp.duration_ms,
            "Correctly rejected request with missing parameter",
        )
        .with_response(data)
    } else {
        CheckResult::fail(
            check,
            resp.duration_ms,
            "Error message does not mention the required parameter",
        )
        .with_response(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_check_carries_code() {
        let check = CountryDetailsCheck::new("MG");
        assert_eq!(check.country_code, "MG");
    }

    #[test]
    fn aggregate_required_fields() {
        // The map view needs all four fields to color a country
        assert!(AGGREGATE_FIELDS.contains(&"visit_count"));
        assert!(AGGREGATE_FIELDS.contains(&"color_intensity"));
    }
}
