//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// API check tool for King Julien's World Cuisine Tour
#[derive(Parser, Debug)]
#[command(name = "cuisine-tour-check")]
#[command(version = "0.1.0")]
#[command(about = "Run endpoint checks against the World Cuisine Tour API")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run API checks
    Test(TestArgs),

    /// List available checks
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for test command
#[derive(Parser, Debug)]
pub struct TestArgs {
    /// API base URL (default http://localhost:3000/api)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Specific check number to run (1-14)
    #[arg(short, long)]
    pub check: Option<u8>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Save results to file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show endpoint details for each check
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./cuisine-tour.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Show environment variables instead of the config file
        #[arg(short, long)]
        env: bool,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to config file (default: first standard location found)
        file: Option<String>,
    },

    /// Show environment variable help
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["cuisine-tour-check", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_test_args() {
        let args = Args::parse_from([
            "cuisine-tour-check",
            "test",
            "--base-url",
            "http://10.0.0.1:3000/api",
            "--check",
            "4",
            "--format",
            "json",
        ]);
        match args.command {
            Command::Test(test_args) => {
                assert_eq!(
                    test_args.base_url.as_deref(),
                    Some("http://10.0.0.1:3000/api")
                );
                assert_eq!(test_args.check, Some(4));
                assert_eq!(test_args.format.as_deref(), Some("json"));
            }
            _ => panic!("Expected Test command"),
        }
    }

    #[test]
    fn test_config_init_args() {
        let args = Args::parse_from(["cuisine-tour-check", "config", "init", "--force"]);
        match args.command {
            Command::Config(config_args) => match config_args.action {
                ConfigAction::Init { output, force } => {
                    assert_eq!(output, "./cuisine-tour.yaml");
                    assert!(force);
                }
                _ => panic!("Expected Init action"),
            },
            _ => panic!("Expected Config command"),
        }
    }
}
