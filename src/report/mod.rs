//! Run results and report generation
//!
//! [`ResultSet`] is the single piece of state a run accumulates. Everything
//! in the report is derived from it when the run ends.

pub mod json;
pub mod text;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::checks::{BASIC_INTEGRATION, INFERENCE};

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
}

/// Check outcomes keyed by name, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<CheckOutcome>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome; re-recording a name replaces it in place
    pub fn record(&mut self, name: &str, passed: bool) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.passed = passed,
            None => self.entries.push(CheckOutcome {
                name: name.to_string(),
                passed,
            }),
        }
    }

    /// Outcome for `name`, if that check ran
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.passed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.entries.iter()
    }

    pub fn summary(&self) -> Summary {
        let passed = self.entries.iter().filter(|e| e.passed).count();
        Summary {
            total: self.entries.len(),
            passed,
            failed: self.entries.len() - passed,
        }
    }
}

/// Totals derived from a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// Percentage of checks passed; undefined for an empty run
    pub fn pass_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.passed as f64 / self.total as f64 * 100.0)
    }

    /// Pass rate with one decimal place, or `n/a`
    pub fn pass_rate_display(&self) -> String {
        match self.pass_rate() {
            Some(rate) => format!("{:.1}%", rate),
            None => "n/a".to_string(),
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        if self.total == 0 {
            None
        } else if self.passed == self.total {
            Some(Verdict::AllPassed)
        } else if self.passed * 2 > self.total {
            Some(Verdict::MostlyWorking)
        } else {
            Some(Verdict::NeedsWork)
        }
    }
}

/// Overall judgement printed at the end of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AllPassed,
    /// More than half passed
    MostlyWorking,
    NeedsWork,
}

/// Advice shown when a particular check fails
const TROUBLESHOOTING: &[(&str, &[&str])] = &[
    (
        BASIC_INTEGRATION,
        &[
            "Check your {client} MCP configuration",
            "Verify the server.js path is correct",
            "Ensure the server starts without errors",
        ],
    ),
    (
        INFERENCE,
        &[
            "Verify your HF_TOKEN is set in the MCP configuration",
            "Check that your token has the necessary permissions",
        ],
    ),
];

/// Everything known about a finished run
#[derive(Debug, Clone)]
pub struct Report {
    /// Chat client the operator was testing through
    pub client: String,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    /// The run ended early by operator cancellation
    pub interrupted: bool,
    pub results: ResultSet,
}

impl Report {
    pub fn summary(&self) -> Summary {
        self.results.summary()
    }

    /// Troubleshooting lines for every failed check that has advice
    pub fn troubleshooting(&self) -> Vec<String> {
        TROUBLESHOOTING
            .iter()
            .filter(|(name, _)| self.results.get(name) == Some(false))
            .flat_map(|(_, tips)| tips.iter())
            .map(|tip| tip.replace("{client}", &self.client))
            .collect()
    }
}
