//! Hugging Face MCP verification CLI
//!
//! Walks a human operator through checking an MCP server integration in a
//! chat client, one yes/no question at a time, and prints a pass/fail report.

use std::path::PathBuf;

use clap::Parser;
use hf_mcp_verify::commands::{Commands, RunArgs};
use hf_mcp_verify::{cli, common::logging};

#[derive(Parser)]
#[command(name = "hf-mcp-verify", about = "Operator-driven MCP server checklist")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    let code = match cli::dispatch(command, cli.config.as_deref()).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    // A stdin read abandoned on Ctrl-C would keep the runtime from shutting down
    std::process::exit(code);
}
