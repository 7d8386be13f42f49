//! Check result models
//!
//! One `CheckResult` is recorded per check invocation, regardless of outcome.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Check;

/// Check execution status
///
/// `Fail` is an unexpected status code or response shape; `Error` is a
/// transport-level failure (connection refused, timeout, invalid JSON).
/// Both count as failures for the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Error,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✅",
            CheckStatus::Fail | CheckStatus::Error => "❌",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single check execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub message: String,
    pub response: Option<serde_json::Value>,
}

impl CheckResult {
    pub fn pass(check: Check, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            duration_ms,
            message: message.into(),
            response: None,
        }
    }

    pub fn fail(check: Check, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            duration_ms,
            message: message.into(),
            response: None,
        }
    }

    pub fn error(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Error,
            duration_ms: 0,
            message: message.into(),
            response: None,
        }
    }

    pub fn with_response(mut self, response: serde_json::Value) -> Self {
        self.response = Some(response);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.status.symbol(),
            self.status,
            self.check.name(),
            self.message
        )
    }
}

/// Summary of a full check run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn new(results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.is_success()).count();
        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == CheckStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            total,
            passed,
            failed,
            errors,
            total_duration_ms,
            results,
        }
    }

    /// Count of non-passing checks; this is the process exit code
    pub fn failures(&self) -> usize {
        self.total - self.passed
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Results that did not pass, in execution order
    pub fn failed_results(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 TEST SUMMARY")?;
        writeln!(f, "   Total Checks: {}", self.total)?;
        writeln!(f, "   ✅ Passed: {}", self.passed)?;
        writeln!(f, "   ❌ Failed: {}", self.failures())?;
        writeln!(f, "   Success Rate: {:.1}%", self.success_rate())?;

        if self.failures() > 0 {
            writeln!(f)?;
            writeln!(f, "🔍 FAILED CHECKS:")?;
            for result in self.failed_results() {
                writeln!(f, "   • {}: {}", result.check.name(), result.message)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_creation() {
        let result = CheckResult::pass(Check::ApiRoot, 42, "root endpoint responding");
        assert!(result.is_success());
        assert_eq!(result.duration_ms, 42);
        assert!(result.response.is_none());
    }

    #[test]
    fn error_result_has_zero_duration() {
        let result = CheckResult::error(Check::ApiRoot, "connection refused");
        assert_eq!(result.duration_ms, 0);
        assert!(!result.is_success());
    }

    #[test]
    fn summary_counts() {
        let results = vec![
            CheckResult::pass(Check::ApiRoot, 10, "ok"),
            CheckResult::fail(Check::CountriesList, 20, "not a list"),
            CheckResult::error(Check::AddVisit, "timeout"),
        ];

        let summary = RunSummary::new(results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.failures(), 2);
        assert_eq!(summary.total_duration_ms, 30);
    }

    #[test]
    fn summary_success_rate_one_decimal() {
        let results = vec![
            CheckResult::pass(Check::ApiRoot, 1, "ok"),
            CheckResult::pass(Check::CountriesList, 1, "ok"),
            CheckResult::fail(Check::AddVisit, 1, "bad"),
        ];

        let summary = RunSummary::new(results);
        assert!((summary.success_rate() - 66.666).abs() < 0.1);
        assert_eq!(format!("{:.1}", summary.success_rate()), "66.7");
    }

    #[test]
    fn empty_summary() {
        let summary = RunSummary::new(Vec::new());
        assert_eq!(summary.success_rate(), 0.0);
        assert_eq!(summary.failures(), 0);
    }

    #[test]
    fn failed_results_listed_in_order() {
        let results = vec![
            CheckResult::fail(Check::ApiRoot, 1, "first"),
            CheckResult::pass(Check::CountriesList, 1, "ok"),
            CheckResult::fail(Check::InvalidRoute, 1, "second"),
        ];

        let summary = RunSummary::new(results);
        let failed: Vec<_> = summary.failed_results().map(|r| r.message.clone()).collect();
        assert_eq!(failed, vec!["first", "second"]);
    }
}
