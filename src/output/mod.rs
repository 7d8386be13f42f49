//! Output formatting module
//!
//! Provides various output formats for check results.

mod formatter;

pub use formatter::{write_results_to_file, OutputFormat, ResultFormatter};
