//! Wire types for the World Cuisine Tour API
//!
//! Countries and visits are external entities; the client requires only the
//! fields listed here and tolerates anything extra the backend sends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Fields every entry of `GET /countries` must carry
pub const COUNTRY_LIST_FIELDS: &[&str] = &["id", "name", "country_code"];

/// Fields every entry of `GET /aggregate` must carry
pub const AGGREGATE_FIELDS: &[&str] = &["country_code", "name", "visit_count", "color_intensity"];

/// A country as returned by `GET /countries`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_intensity: Option<f64>,
}

/// Body for `POST /visit` and `PUT /visit/{id}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisitPayload {
    pub country_id: String,
    pub restaurant_name: String,
    pub location: String,
    pub items_devoured: String,
    pub king_julien_favorite: Option<String>,
    pub mort_favorite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub is_fusion: bool,
    pub fusion_country_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,
}

impl VisitPayload {
    /// A complete single-country visit
    pub fn standard(country_id: impl Into<String>) -> Self {
        Self {
            country_id: country_id.into(),
            restaurant_name: "Royal Lemur Bistro".to_string(),
            location: "Downtown Madagascar".to_string(),
            items_devoured: "Baobab fruit salad, Lemur leaf wraps, Royal mango smoothie"
                .to_string(),
            king_julien_favorite: Some("Baobab fruit salad - absolutely divine!".to_string()),
            mort_favorite: Some("Royal mango smoothie - so sweet and refreshing!".to_string()),
            rating: None,
            is_fusion: false,
            fusion_country_id: None,
            visit_date: None,
        }
    }

    /// A visit combining two countries' cuisines
    pub fn fusion(
        country_id: impl Into<String>,
        fusion_country_id: impl Into<String>,
        country_name: &str,
        fusion_country_name: &str,
    ) -> Self {
        Self {
            country_id: country_id.into(),
            restaurant_name: "Fusion Palace of Flavors".to_string(),
            location: "International District".to_string(),
            items_devoured: format!(
                "Fusion delights combining {country_name} and {fusion_country_name} cuisines"
            ),
            king_julien_favorite: Some("The royal fusion platter - magnificent!".to_string()),
            mort_favorite: Some("Sweet fusion dessert - absolutely delightful!".to_string()),
            rating: None,
            is_fusion: true,
            fusion_country_id: Some(fusion_country_id.into()),
            visit_date: None,
        }
    }

    pub fn with_visit_date(mut self, date: NaiveDate) -> Self {
        self.visit_date = Some(date);
        self
    }
}

/// Random identifier fallback when no real country or visit id is known.
/// Best-effort scaffolding: requests built on one may legitimately be
/// rejected by a real backend.
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// Required fields absent from a JSON object. A non-object is missing all
/// of them.
pub fn missing_fields<'a>(value: &Value, required: &[&'a str]) -> Vec<&'a str> {
    match value.as_object() {
        Some(map) => required
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect(),
        None => required.to_vec(),
    }
}

/// True if the body carries an `error` string mentioning "required"
/// (case-insensitive)
pub fn error_mentions_required(value: &Value) -> bool {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(|msg| msg.to_lowercase().contains("required"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn country_tolerates_extra_fields() {
        let raw = json!({
            "id": "a1b2",
            "name": "Madagascar",
            "country_code": "MG",
            "flag_emoji": "🇲🇬",
            "region": "Africa"
        });

        let country: Country = serde_json::from_value(raw).unwrap();
        assert_eq!(country.country_code, "MG");
        assert!(country.visit_count.is_none());
    }

    #[test]
    fn standard_payload_serializes_nulls() {
        let payload = VisitPayload::standard("c-1");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["restaurant_name"], "Royal Lemur Bistro");
        assert_eq!(value["is_fusion"], false);
        // Explicit null, matching the original request body
        assert!(value["fusion_country_id"].is_null());
        // Optional extras are omitted entirely
        assert!(value.get("rating").is_none());
        assert!(value.get("visit_date").is_none());
    }

    #[test]
    fn fusion_payload_references_both_countries() {
        let payload = VisitPayload::fusion("c-1", "c-2", "Madagascar", "France");
        assert!(payload.is_fusion);
        assert_eq!(payload.fusion_country_id.as_deref(), Some("c-2"));
        assert!(payload.items_devoured.contains("Madagascar"));
        assert!(payload.items_devoured.contains("France"));
    }

    #[test]
    fn visit_date_serializes_as_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let payload = VisitPayload::standard("c-1").with_visit_date(date);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["visit_date"], "2025-03-14");
    }

    #[test]
    fn missing_fields_on_partial_object() {
        let value = json!({"id": "x", "name": "Fiji"});
        let missing = missing_fields(&value, COUNTRY_LIST_FIELDS);
        assert_eq!(missing, vec!["country_code"]);
    }

    #[test]
    fn missing_fields_on_non_object() {
        let value = json!(["not", "an", "object"]);
        let missing = missing_fields(&value, AGGREGATE_FIELDS);
        assert_eq!(missing.len(), AGGREGATE_FIELDS.len());
    }

    #[test]
    fn required_error_matching_is_case_insensitive() {
        assert!(error_mentions_required(&json!({
            "error": "Country code is REQUIRED"
        })));
        assert!(!error_mentions_required(&json!({
            "error": "not found"
        })));
        assert!(!error_mentions_required(&json!({"message": "required"})));
    }

    #[test]
    fn random_ids_are_unique() {
        assert_ne!(random_id(), random_id());
    }
}
