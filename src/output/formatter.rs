//! Output formatters for check results
//!
//! Provides table, JSON, CSV, and brief summary output formats.

use std::io::Write;

use crate::models::{CheckResult, CheckStatus, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single check result
    pub fn format_result(&self, result: &CheckResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self.format_result_csv(result),
            OutputFormat::Summary => format!("{result}"),
        }
    }

    fn format_result_table(&self, result: &CheckResult) -> String {
        let status_str = if self.colorize {
            match result.status {
                CheckStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                CheckStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                CheckStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match result.status {
                CheckStatus::Pass => "✓ PASS",
                CheckStatus::Fail => "✗ FAIL",
                CheckStatus::Error => "! ERROR",
            }
        };

        format!(
            "{:2}. {:26} {} [{:>6}ms]",
            result.check.number(),
            result.check.name(),
            status_str,
            result.duration_ms
        )
    }

    fn format_result_csv(&self, result: &CheckResult) -> String {
        format!(
            "{},{},{},{},\"{}\"",
            result.check.number(),
            result.check.name(),
            result.status,
            result.duration_ms,
            result.message.replace('"', "\"\"")
        )
    }

    /// Format a full run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self.format_summary_csv(summary),
            OutputFormat::Summary => format!("{summary}"),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n╔════════════════════════════════════════════════════╗\n");
        output.push_str("║  World Cuisine Tour API - Check Results            ║\n");
        output.push_str("╠════════════════════════════════════════════════════╣\n");

        for result in &summary.results {
            output.push_str(&format!("║ {} ║\n", self.format_result_table(result)));
        }

        output.push_str("╠════════════════════════════════════════════════════╣\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failures() > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failures())
        } else {
            summary.failures().to_string()
        };

        output.push_str(&format!(
            "║ Total: {:2} | Pass: {} | Fail: {}                       ║\n",
            summary.total, pass_str, fail_str
        ));
        output.push_str(&format!(
            "║ Success Rate: {:5.1}% | Duration: {:6}ms           ║\n",
            summary.success_rate(),
            summary.total_duration_ms
        ));
        output.push_str("╚════════════════════════════════════════════════════╝\n");

        if summary.failures() > 0 {
            output.push_str("\nFailed checks:\n");
            for result in summary.failed_results() {
                output.push_str(&format!("  • {}: {}\n", result.check.name(), result.message));
            }
        }

        output
    }

    fn format_summary_csv(&self, summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str("check_num,check_name,status,duration_ms,message\n");
        for result in &summary.results {
            output.push_str(&self.format_result_csv(result));
            output.push('\n');
        }
        output
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Write a formatted summary to a file
pub fn write_results_to_file(
    path: &str,
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = ResultFormatter::new(format).no_color();
    let content = formatter.format_summary(summary);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Check;

    fn sample_summary() -> RunSummary {
        RunSummary::new(vec![
            CheckResult::pass(Check::ApiRoot, 12, "root ok"),
            CheckResult::fail(Check::CountriesList, 8, "not a list"),
        ])
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_format_result_table() {
        let result = CheckResult::pass(Check::ApiRoot, 100, "ok");
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_result(&result);
        assert!(output.contains("API Root"));
        assert!(output.contains("PASS"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_format_summary_json_round_trip() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&sample_summary());

        let parsed: RunSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.passed, 1);
    }

    #[test]
    fn test_format_summary_csv() {
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let output = formatter.format_summary(&sample_summary());

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("check_num,"));
        assert!(lines[1].contains("API Root"));
        assert!(lines[2].contains("not a list"));
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let result = CheckResult::fail(Check::ApiRoot, 1, "said \"nope\"");
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let output = formatter.format_result(&result);
        assert!(output.contains("\"said \"\"nope\"\"\""));
    }

    #[test]
    fn test_summary_table_lists_failures() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_summary(&sample_summary());
        assert!(output.contains("Failed checks:"));
        assert!(output.contains("Countries List: not a list"));
    }
}
