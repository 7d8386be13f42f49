//! cuisine-tour-check - API test harness for King Julien's World Cuisine Tour
//!
//! A CLI tool that runs a fixed sequence of endpoint checks against a
//! running World Cuisine Tour backend, validates status codes and response
//! shapes, and exits with the number of failed checks.
//!
//! ## Usage
//!
//! ```bash
//! # Run all checks against a local backend
//! cuisine-tour-check test
//!
//! # Run against a deployed backend
//! cuisine-tour-check test --base-url https://cuisine.example.com/api
//!
//! # Run a single check
//! cuisine-tour-check test --check 4
//!
//! # List available checks
//! cuisine-tour-check list --detailed
//!
//! # Write an example config file
//! cuisine-tour-check config init
//! ```

use anyhow::Result;
use clap::Parser;

mod checks;
mod cli;
mod config;
mod http;
mod models;
mod output;
mod runner;
mod utils;

use cli::Args;
use config::{ConfigFile, EnvConfig};
use models::Check;
use output::{write_results_to_file, OutputFormat, ResultFormatter};
use runner::{CheckRunner, RunConfig};
use utils::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    let verbose = args.verbose || env.verbose.unwrap_or(false);
    init_logger(verbose);

    match args.command {
        cli::Command::Test(test_args) => {
            run_checks(test_args, env).await?;
        }
        cli::Command::List(list_args) => {
            list_checks(list_args);
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

async fn run_checks(args: cli::TestArgs, env: EnvConfig) -> Result<()> {
    // CLI > environment > config file > defaults
    let file = match &env.config_file {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let base_url = args
        .base_url
        .or(env.base_url)
        .unwrap_or_else(|| file.app.base_url.clone());
    let timeout = args
        .timeout
        .or(env.timeout)
        .unwrap_or(file.app.timeout_secs);
    let format_name = args
        .format
        .or(env.format)
        .unwrap_or_else(|| file.app.format.clone());

    let format = OutputFormat::from_str(&format_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {format_name}"))?;
    let formatter = ResultFormatter::new(format);

    let run_config = RunConfig::new(base_url).with_timeout(timeout);
    let runner = CheckRunner::new(run_config)?;

    if let Some(check_num) = args.check {
        let check = Check::from_number(check_num)
            .ok_or_else(|| anyhow::anyhow!("Invalid check number: {check_num} (valid: 1-14)"))?;

        let result = runner.run_check(check).await;
        if format != OutputFormat::Table {
            println!("{}", formatter.format_result(&result));
        }

        std::process::exit(if result.is_success() { 0 } else { 1 });
    }

    let summary = runner.run_all().await;
    println!("{}", formatter.format_summary(&summary));

    if let Some(output_path) = &args.output {
        write_results_to_file(output_path, &summary, format)?;
        println!("Results saved to: {output_path}");
    }

    // Exit code contract: number of failed checks, 0 when all passed
    std::process::exit(summary.failures() as i32);
}

fn list_checks(args: cli::ListArgs) {
    println!("\nWorld Cuisine Tour API Checks ({} total)\n", Check::all().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut current_category = "";

    for check in Check::all() {
        let category = check.category();
        if category != current_category {
            if !current_category.is_empty() {
                println!();
            }
            println!("\n{category} Checks:");
            println!("──────────────────────────────────────────────────────────────────────");
            current_category = category;
        }

        if args.detailed {
            println!(
                "  {:2}. {:28} [{}]",
                check.number(),
                check.name(),
                check.endpoint()
            );
        } else {
            println!("  {:2}. {}", check.number(), check.name());
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    use std::path::Path;

    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { env, format } => {
            if env {
                let env_config = EnvConfig::load();
                env_config.print_summary();
            } else {
                let config = ConfigFile::load_default()?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&config)?
                } else {
                    serde_yaml::to_string(&config)?
                };
                println!("{output}");
            }
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./cuisine-tour.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
