//! Visit endpoint checks
//!
//! Covers the per-country restaurant listing and the full visit lifecycle:
//! create, create as fusion, rejected create, update, delete.

use chrono::Local;
use serde_json::{json, Value};
use tracing::info;

use crate::http::ApiClient;
use crate::models::{
    error_mentions_required, random_id, Check, CheckResult, Country, VisitPayload,
};

use super::countries::run_required_param_check;

/// Visit id from a response body, tolerating numeric ids and the
/// single-element arrays some backends return from update/insert.
fn extract_visit_id(data: &Value) -> Option<String> {
    let target = data.as_array().and_then(|a| a.first()).unwrap_or(data);
    match target.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Check 7: restaurant visits for a single country
#[derive(Clone, Debug)]
pub struct RestaurantsCheck {
    pub country_id: String,
}

impl RestaurantsCheck {
    pub fn new(country_id: impl Into<String>) -> Self {
        Self {
            country_id: country_id.into(),
        }
    }

    /// Use the first listed country, else a random id that a real backend
    /// will likely reject
    pub fn from_countries(countries: &[Country]) -> Self {
        match countries.first() {
            Some(country) => Self::new(country.id.clone()),
            None => Self::new(random_id()),
        }
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {} (country_id={})", Check::Restaurants, self.country_id);

        let path = format!("/restaurants?country_id={}", self.country_id);
        let resp = match client.get(&path).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::Restaurants, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::Restaurants,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::Restaurants,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        match data.as_array() {
            Some(entries) => CheckResult::pass(
                Check::Restaurants,
                resp.duration_ms,
                format!("Retrieved {} restaurant visits", entries.len()),
            ),
            None => CheckResult::fail(
                Check::Restaurants,
                resp.duration_ms,
                "Response is not a list",
            )
            .with_response(data),
        }
    }
}

/// Check 8: restaurant listing without a country id is rejected
#[derive(Clone, Debug, Default)]
pub struct RestaurantsInvalidCheck;

impl RestaurantsInvalidCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::RestaurantsInvalid);
        run_required_param_check(client, Check::RestaurantsInvalid, "/restaurants").await
    }
}

/// Check 9: adding a complete single-country visit.
///
/// On success the created visit's id is handed back so the update and
/// delete checks can target it.
#[derive(Clone, Debug)]
pub struct AddVisitCheck {
    pub payload: VisitPayload,
}

impl AddVisitCheck {
    pub fn from_countries(countries: &[Country]) -> Self {
        let country_id = match countries.first() {
            Some(country) => country.id.clone(),
            None => random_id(),
        };
        Self {
            payload: VisitPayload::standard(country_id),
        }
    }

    pub async fn run(&self, client: &ApiClient) -> (CheckResult, Option<String>) {
        info!("Running {}", Check::AddVisit);

        let resp = match client.post("/visit", &self.payload).await {
            Ok(resp) => resp,
            Err(e) => return (CheckResult::error(Check::AddVisit, e.to_string()), None),
        };

        if resp.status_code != 200 {
            let result = CheckResult::fail(
                Check::AddVisit,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
            return (result, None);
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                let result =
                    CheckResult::error(Check::AddVisit, format!("Invalid JSON response: {e}"));
                return (result, None);
            }
        };

        let has_name = data.get("restaurant_name").is_some();
        match extract_visit_id(&data) {
            Some(id) if has_name => {
                let result = CheckResult::pass(
                    Check::AddVisit,
                    resp.duration_ms,
                    format!("Added visit to {}", self.payload.restaurant_name),
                );
                (result, Some(id))
            }
            _ => {
                let result = CheckResult::fail(
                    Check::AddVisit,
                    resp.duration_ms,
                    "Response missing expected fields",
                )
                .with_response(data);
                (result, None)
            }
        }
    }
}

/// Check 10: adding a fusion visit that references a second country
#[derive(Clone, Debug)]
pub struct AddFusionVisitCheck {
    pub payload: VisitPayload,
}

impl AddFusionVisitCheck {
    pub fn from_countries(countries: &[Country]) -> Self {
        let payload = match countries {
            [first, second, ..] => VisitPayload::fusion(
                first.id.clone(),
                second.id.clone(),
                &first.name,
                &second.name,
            ),
            _ => VisitPayload::fusion(random_id(), random_id(), "Test Country 1", "Test Country 2"),
        };
        Self { payload }
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::AddFusionVisit);

        let resp = match client.post("/visit", &self.payload).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::AddFusionVisit, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::AddFusionVisit,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::AddFusionVisit,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        let fusion_set = matches!(data.get("is_fusion"), Some(Value::Bool(true)));
        if extract_visit_id(&data).is_some() && fusion_set {
            CheckResult::pass(
                Check::AddFusionVisit,
                resp.duration_ms,
                format!("Added fusion visit to {}", self.payload.restaurant_name),
            )
        } else {
            CheckResult::fail(
                Check::AddFusionVisit,
                resp.duration_ms,
                "Response missing fusion fields or fusion flag not set",
            )
            .with_response(data)
        }
    }
}

/// Check 11: a visit missing required fields is rejected
#[derive(Clone, Debug, Default)]
pub struct AddVisitInvalidCheck;

impl AddVisitInvalidCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {}", Check::AddVisitInvalid);

        // country_id, location, items_devoured deliberately omitted
        let invalid = json!({ "restaurant_name": "Incomplete Restaurant" });

        let resp = match client.post("/visit", &invalid).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::AddVisitInvalid, e.to_string()),
        };

        if resp.status_code != 400 {
            return CheckResult::fail(
                Check::AddVisitInvalid,
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
            Err(e) => {
                return CheckResult::error(
                    Check::AddVisitInvalid,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        if error_mentions_required(&data) {
            CheckResult::pass(
                Check::AddVisitInvalid,
                resp.duration_ms,
                "Correctly rejected visit with missing required fields",
            )
            .with_response(data)
        } else {
            CheckResult::fail(
                Check::AddVisitInvalid,
                resp.duration_ms,
                "Error message does not mention required fields",
            )
            .with_response(data)
        }
    }
}

/// Check 12: updating an existing visit
#[derive(Clone, Debug)]
pub struct UpdateVisitCheck {
    pub visit_id: String,
    pub payload: VisitPayload,
}

impl UpdateVisitCheck {
    /// Target the visit created earlier in the run, else a random id that a
    /// real backend will likely reject
    pub fn new(visit_id: Option<String>, countries: &[Country]) -> Self {
        let country_id = match countries.first() {
            Some(country) => country.id.clone(),
            None => random_id(),
        };
        let payload = VisitPayload::standard(country_id)
            .with_visit_date(Local::now().date_naive());

        Self {
            visit_id: visit_id.unwrap_or_else(random_id),
            payload,
        }
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {} (id={})", Check::UpdateVisit, self.visit_id);

        let path = format!("/visit/{}", self.visit_id);
        let resp = match client.put(&path, &self.payload).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::UpdateVisit, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::UpdateVisit,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        let data = match resp.json() {
            Ok(data) => data,
            Err(e) => {
                return CheckResult::error(
                    Check::UpdateVisit,
                    format!("Invalid JSON response: {e}"),
                )
            }
        };

        match extract_visit_id(&data) {
            Some(_) => CheckResult::pass(
                Check::UpdateVisit,
                resp.duration_ms,
                format!("Updated visit at {}", self.payload.restaurant_name),
            ),
            None => CheckResult::fail(
                Check::UpdateVisit,
                resp.duration_ms,
                "Response missing visit id",
            )
            .with_response(data),
        }
    }
}

/// Check 13: deleting a visit
#[derive(Clone, Debug)]
pub struct DeleteVisitCheck {
    pub visit_id: String,
}

impl DeleteVisitCheck {
    pub fn new(visit_id: Option<String>) -> Self {
        Self {
            visit_id: visit_id.unwrap_or_else(random_id),
        }
    }

    pub async fn run(&self, client: &ApiClient) -> CheckResult {
        info!("Running {} (id={})", Check::DeleteVisit, self.visit_id);

        let path = format!("/visit/{}", self.visit_id);
        let resp = match client.delete(&path).await {
            Ok(resp) => resp,
            Err(e) => return CheckResult::error(Check::DeleteVisit, e.to_string()),
        };

        if resp.status_code != 200 {
            return CheckResult::fail(
                Check::DeleteVisit,
                resp.duration_ms,
                format!("HTTP {}: {}", resp.status_code, resp.body_excerpt()),
            );
        }

        match resp.json() {
            Ok(_) => CheckResult::pass(Check::DeleteVisit, resp.duration_ms, "Deleted visit"),
            Err(e) => {
                CheckResult::error(Check::DeleteVisit, format!("Invalid JSON response: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_countries() -> Vec<Country> {
        vec![
            Country {
                id: "c-1".to_string(),
                name: "Madagascar".to_string(),
                country_code: "MG".to_string(),
                visit_count: None,
                color_intensity: None,
            },
            Country {
                id: "c-2".to_string(),
                name: "France".to_string(),
                country_code: "FR".to_string(),
                visit_count: None,
                color_intensity: None,
            },
        ]
    }

    #[test]
    fn add_visit_uses_first_country() {
        let check = AddVisitCheck::from_countries(&sample_countries());
        assert_eq!(check.payload.country_id, "c-1");
        assert!(!check.payload.is_fusion);
    }

    #[test]
    fn add_visit_falls_back_to_random_id() {
        let check = AddVisitCheck::from_countries(&[]);
        // UUIDs are 36 chars with hyphens
        assert_eq!(check.payload.country_id.len(), 36);
    }

    #[test]
    fn fusion_visit_uses_first_two_countries() {
        let check = AddFusionVisitCheck::from_countries(&sample_countries());
        assert_eq!(check.payload.country_id, "c-1");
        assert_eq!(check.payload.fusion_country_id.as_deref(), Some("c-2"));
        assert!(check.payload.is_fusion);
    }

    #[test]
    fn fusion_visit_falls_back_with_one_country() {
        let one = &sample_countries()[..1];
        let check = AddFusionVisitCheck::from_countries(one);
        // A single known country is not enough for a fusion pair
        assert_ne!(check.payload.country_id, "c-1");
    }

    #[test]
    fn update_check_prefers_known_visit_id() {
        let check = UpdateVisitCheck::new(Some("v-9".to_string()), &sample_countries());
        assert_eq!(check.visit_id, "v-9");
        assert!(check.payload.visit_date.is_some());
    }

    #[test]
    fn delete_check_synthesizes_id_when_unknown() {
        let check = DeleteVisitCheck::new(None);
        assert_eq!(check.visit_id.len(), 36);
    }

    #[test]
    fn extract_visit_id_variants() {
        assert_eq!(
            extract_visit_id(&json!({"id": "abc"})).as_deref(),
            Some("abc")
        );
        assert_eq!(extract_visit_id(&json!({"id": 7})).as_deref(), Some("7"));
        assert_eq!(
            extract_visit_id(&json!([{"id": "abc"}])).as_deref(),
            Some("abc")
        );
        assert_eq!(extract_visit_id(&json!({"name": "x"})), None);
        assert_eq!(extract_visit_id(&json!([])), None);
    }
}
