//! Endpoint check implementations
//!
//! All 14 checks against the World Cuisine Tour API.
//!
//! ## Categories
//!
//! ### Core (1)
//! - API Root
//!
//! ### Countries (2-6)
//! - Countries Aggregate
//! - Countries List
//! - Country Details
//! - Country Details (Invalid)
//! - Cuisines List
//!
//! ### Visits (7-13)
//! - Restaurant List
//! - Restaurant List (Invalid)
//! - Add Visit
//! - Add Visit (Fusion)
//! - Add Visit (Invalid)
//! - Update Visit
//! - Delete Visit
//!
//! ### Errors (14)
//! - Invalid Route

mod countries;
mod root;
mod visits;

pub use countries::{
    CountriesAggregateCheck, CountriesListCheck, CountryDetailsCheck, CountryDetailsInvalidCheck,
    CuisinesCheck,
};
pub use root::{ApiRootCheck, InvalidRouteCheck};
pub use visits::{
    AddFusionVisitCheck, AddVisitCheck, AddVisitInvalidCheck, DeleteVisitCheck, RestaurantsCheck,
    RestaurantsInvalidCheck, UpdateVisitCheck,
};

use crate::http::ApiClient;
use crate::models::{Check, CheckResult};

/// Run a single check in isolation.
///
/// Data normally threaded through a full run (country ids, visit ids) is
/// replaced by defaults or random identifiers, so dependent checks may
/// legitimately fail against a real backend when run alone.
pub async fn run_check(client: &ApiClient, check: Check) -> CheckResult {
    match check {
        Check::ApiRoot => ApiRootCheck::new().run(client).await,
        Check::CountriesAggregate => CountriesAggregateCheck::new().run(client).await,
        Check::CountriesList => CountriesListCheck::new().run(client).await.0,
        Check::CountryDetails => CountryDetailsCheck::new("US").run(client).await,
        Check::CountryDetailsInvalid => CountryDetailsInvalidCheck::new().run(client).await,
        Check::Cuisines => CuisinesCheck::new().run(client).await,
        Check::Restaurants => RestaurantsCheck::from_countries(&[]).run(client).await,
        Check::RestaurantsInvalid => RestaurantsInvalidCheck::new().run(client).await,
        Check::AddVisit => AddVisitCheck::from_countries(&[]).run(client).await.0,
        Check::AddFusionVisit => AddFusionVisitCheck::from_countries(&[]).run(client).await,
        Check::AddVisitInvalid => AddVisitInvalidCheck::new().run(client).await,
        Check::UpdateVisit => UpdateVisitCheck::new(None, &[]).run(client).await,
        Check::DeleteVisit => DeleteVisitCheck::new(None).run(client).await,
        Check::InvalidRoute => InvalidRouteCheck::new().run(client).await,
    }
}
