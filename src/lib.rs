//! Hugging Face MCP verification harness
//!
//! Runs an ordered checklist of manual checks against an MCP server
//! integration, with a human operator answering each one, and reports
//! the results.

pub mod checks;
pub mod cli;
pub mod commands;
pub mod common;
pub mod operator;
pub mod report;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use report::{Report, ResultSet};
pub use runner::{run_checks, RunOptions, RunOutcome};
