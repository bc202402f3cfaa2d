//! Command dispatch
//!
//! Resolves configuration against command-line flags and drives the
//! selected command on the process's stdin/stdout.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use crate::checks::{self, Check};
use crate::commands::{Commands, RunArgs};
use crate::common::config::Config;
use crate::common::Result;
use crate::operator::{Console, Interrupt, Operator};
use crate::report;
use crate::runner::{self, RunOptions};

/// Dispatch a command, loading config from `config_path` or the default location
pub async fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match command {
        Commands::Run(args) => run(args, config).await,
        Commands::List { json } => list(&config, json),
    }
}

async fn run(args: RunArgs, config: Config) -> Result<()> {
    let client = args.client.unwrap_or(config.session.client);
    let checks = checks::select(checks::catalog(&client), &args.only)?;
    let options = RunOptions {
        pause_between_checks: config.session.pause_between_checks && !args.no_pause,
    };
    let json_path = args.json.or(config.report.json_path);

    let mut console = Console::stdio(Interrupt::on_ctrl_c());
    print_banner(&mut console)?;

    let report = runner::run_suite(&checks, &mut console, &options, &client).await?;

    if report.interrupted && report.results.is_empty() {
        console.blank()?;
        console.say("Test suite interrupted. Goodbye!")?;
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    report::text::render(&report, &mut stdout)?;
    stdout.flush()?;

    if let Some(path) = json_path {
        report::json::write(&report, &path)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_banner(operator: &mut dyn Operator) -> Result<()> {
    let rule = "=".repeat(60);
    operator.say(&rule)?;
    operator.say(&"HUGGING FACE MCP SERVER TEST SUITE".bold().to_string())?;
    operator.say(&rule)?;
    operator.say(&format!(
        "Started at: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    operator.blank()
}

#[derive(Serialize)]
struct CheckListing<'a> {
    name: &'a str,
    description: &'a str,
}

fn list(config: &Config, json: bool) -> Result<()> {
    let checks = checks::catalog(&config.session.client);

    if json {
        let listing: Vec<CheckListing> = checks
            .iter()
            .map(|c| CheckListing {
                name: c.name(),
                description: c.description(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Checks (in run order):".bold());
    for (i, check) in checks.iter().enumerate() {
        print_listing(i + 1, check.as_ref());
    }
    Ok(())
}

fn print_listing(index: usize, check: &dyn Check) {
    println!(
        "  {:>2}. {:<28} {}",
        index,
        check.name(),
        check.description().dimmed()
    );
}
