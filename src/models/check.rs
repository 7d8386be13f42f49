//! Check catalog for the World Cuisine Tour API
//!
//! Defines the fixed sequence of endpoint checks and their metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All 14 endpoint checks, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    // Core (1)
    ApiRoot,

    // Countries (2-6)
    CountriesAggregate,
    CountriesList,
    CountryDetails,
    CountryDetailsInvalid,
    Cuisines,

    // Visits (7-13)
    Restaurants,
    RestaurantsInvalid,
    AddVisit,
    AddFusionVisit,
    AddVisitInvalid,
    UpdateVisit,
    DeleteVisit,

    // Errors (14)
    InvalidRoute,
}

impl Check {
    /// Get check number (1-14)
    pub fn number(&self) -> u8 {
        match self {
            Check::ApiRoot => 1,
            Check::CountriesAggregate => 2,
            Check::CountriesList => 3,
            Check::CountryDetails => 4,
            Check::CountryDetailsInvalid => 5,
            Check::Cuisines => 6,
            Check::Restaurants => 7,
            Check::RestaurantsInvalid => 8,
            Check::AddVisit => 9,
            Check::AddFusionVisit => 10,
            Check::AddVisitInvalid => 11,
            Check::UpdateVisit => 12,
            Check::DeleteVisit => 13,
            Check::InvalidRoute => 14,
        }
    }

    /// Get check name
    pub fn name(&self) -> &'static str {
        match self {
            Check::ApiRoot => "API Root",
            Check::CountriesAggregate => "Countries Aggregate",
            Check::CountriesList => "Countries List",
            Check::CountryDetails => "Country Details",
            Check::CountryDetailsInvalid => "Country Details (Invalid)",
            Check::Cuisines => "Cuisines List",
            Check::Restaurants => "Restaurant List",
            Check::RestaurantsInvalid => "Restaurant List (Invalid)",
            Check::AddVisit => "Add Visit",
            Check::AddFusionVisit => "Add Visit (Fusion)",
            Check::AddVisitInvalid => "Add Visit (Invalid)",
            Check::UpdateVisit => "Update Visit",
            Check::DeleteVisit => "Delete Visit",
            Check::InvalidRoute => "Invalid Route",
        }
    }

    /// Get check category
    pub fn category(&self) -> &'static str {
        match self {
            Check::ApiRoot => "Core",
            Check::CountriesAggregate
            | Check::CountriesList
            | Check::CountryDetails
            | Check::CountryDetailsInvalid
            | Check::Cuisines => "Countries",
            Check::Restaurants
            | Check::RestaurantsInvalid
            | Check::AddVisit
            | Check::AddFusionVisit
            | Check::AddVisitInvalid
            | Check::UpdateVisit
            | Check::DeleteVisit => "Visits",
            Check::InvalidRoute => "Errors",
        }
    }

    /// Endpoint exercised by this check
    pub fn endpoint(&self) -> &'static str {
        match self {
            Check::ApiRoot => "GET /",
            Check::CountriesAggregate => "GET /aggregate",
            Check::CountriesList => "GET /countries",
            Check::CountryDetails => "GET /country?code={code}",
            Check::CountryDetailsInvalid => "GET /country",
            Check::Cuisines => "GET /cuisines",
            Check::Restaurants => "GET /restaurants?country_id={id}",
            Check::RestaurantsInvalid => "GET /restaurants",
            Check::AddVisit => "POST /visit",
            Check::AddFusionVisit => "POST /visit",
            Check::AddVisitInvalid => "POST /visit",
            Check::UpdateVisit => "PUT /visit/{id}",
            Check::DeleteVisit => "DELETE /visit/{id}",
            Check::InvalidRoute => "GET /nonexistent",
        }
    }

    /// Get all checks in execution order
    pub fn all() -> Vec<Check> {
        vec![
            Check::ApiRoot,
            Check::CountriesAggregate,
            Check::CountriesList,
            Check::CountryDetails,
            Check::CountryDetailsInvalid,
            Check::Cuisines,
            Check::Restaurants,
            Check::RestaurantsInvalid,
            Check::AddVisit,
            Check::AddFusionVisit,
            Check::AddVisitInvalid,
            Check::UpdateVisit,
            Check::DeleteVisit,
            Check::InvalidRoute,
        ]
    }

    /// Parse from check number
    pub fn from_number(n: u8) -> Option<Check> {
        Check::all().into_iter().find(|c| c.number() == n)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check {}: {}", self.number(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_numbers() {
        assert_eq!(Check::ApiRoot.number(), 1);
        assert_eq!(Check::InvalidRoute.number(), 14);
    }

    #[test]
    fn check_from_number() {
        assert_eq!(Check::from_number(1), Some(Check::ApiRoot));
        assert_eq!(Check::from_number(14), Some(Check::InvalidRoute));
        assert_eq!(Check::from_number(15), None);
    }

    #[test]
    fn all_checks_ordered() {
        let all = Check::all();
        assert_eq!(all.len(), 14);
        for (i, check) in all.iter().enumerate() {
            assert_eq!(check.number() as usize, i + 1);
        }
    }

    #[test]
    fn check_categories() {
        assert_eq!(Check::ApiRoot.category(), "Core");
        assert_eq!(Check::CountriesAggregate.category(), "Countries");
        assert_eq!(Check::AddFusionVisit.category(), "Visits");
        assert_eq!(Check::InvalidRoute.category(), "Errors");
    }
}
