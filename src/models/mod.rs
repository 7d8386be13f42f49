//! Data models for the World Cuisine Tour API checks
//!
//! This module contains all data structures used throughout the application.

mod api;
mod check;
mod result;

pub use api::{
    error_mentions_required, missing_fields, random_id, Country, VisitPayload, AGGREGATE_FIELDS,
    COUNTRY_LIST_FIELDS,
};
pub use check::Check;
pub use result::{CheckResult, CheckStatus, RunSummary};
