//! CLI command definitions
//!
//! Defines the clap commands for the verification CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the verification checklist (default)
    Run(RunArgs),

    /// List the checks without running them
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Chat client named in the instructions (default: Cursor)
    #[arg(long)]
    pub client: Option<String>,

    /// Only run the named check; can be given multiple times
    /// Example: --only "Model Search" --only "Spaces Search"
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Don't wait for Enter between checks
    #[arg(long)]
    pub no_pause: bool,

    /// Also write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}
