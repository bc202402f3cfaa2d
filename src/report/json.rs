//! Machine-readable report export

use std::path::Path;

use serde::Serialize;

use super::{CheckOutcome, Report, Summary, Verdict};
use crate::common::{Error, Result};

/// Serialized form of a [`Report`]
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub client: &'a str,
    pub started_at: String,
    pub finished_at: String,
    pub interrupted: bool,
    #[serde(flatten)]
    pub summary: Summary,
    /// `null` when no check completed
    pub pass_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    pub results: Vec<&'a CheckOutcome>,
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        let summary = report.summary();
        Self {
            client: &report.client,
            started_at: report.started_at.to_rfc3339(),
            finished_at: report.finished_at.to_rfc3339(),
            interrupted: report.interrupted,
            summary,
            pass_rate: summary.pass_rate(),
            verdict: summary.verdict(),
            results: report.results.iter().collect(),
        }
    }
}

/// Render the report as pretty-printed JSON
pub fn to_string(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Write the report as JSON to `path`, creating parent directories
pub fn write(report: &Report, path: &Path) -> Result<()> {
    let content = to_string(report)?;
    let write_err = |e: std::io::Error| Error::FileWrite {
        path: path.display().to_string(),
        error: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;
    tracing::info!("Wrote JSON report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::report;
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = to_string(&report(&[("Model Search", true), ("Spaces Search", false)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["client"], "Cursor");
        assert_eq!(value["interrupted"], false);
        assert_eq!(value["total"], 2);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["pass_rate"], 50.0);
        assert_eq!(value["verdict"], "needs_work");
        assert_eq!(value["results"][0]["name"], "Model Search");
        assert_eq!(value["results"][1]["passed"], false);
    }

    #[test]
    fn test_empty_run_has_null_rate() {
        let value: serde_json::Value =
            serde_json::from_str(&to_string(&report(&[])).unwrap()).unwrap();
        assert!(value["pass_rate"].is_null());
        assert!(value.get("verdict").is_none());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        write(&report(&[("Model Search", true)]), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Model Search\""));
    }
}
