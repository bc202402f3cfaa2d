//! Check sequence runner
//!
//! Runs checks one after another, turning every way a check can end into
//! an entry in the [`ResultSet`]:
//!
//! - a verdict is recorded as-is
//! - an error or a panic inside the check is shown to the operator and
//!   recorded as a failure; the next check still runs
//! - cancellation stops the whole run, keeping the outcomes collected so far

use std::any::Any;
use std::panic::AssertUnwindSafe;

use chrono::Local;
use colored::Colorize;
use futures_util::FutureExt;

use crate::checks::Check;
use crate::common::{Error, Result};
use crate::operator::Operator;
use crate::report::{Report, ResultSet};

/// Options controlling how a run is paced
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Wait for Enter between checks
    pub pause_between_checks: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pause_between_checks: true,
        }
    }
}

/// Outcomes of a run and whether it was cut short
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub results: ResultSet,
    pub interrupted: bool,
}

/// Run `checks` in order against the operator
///
/// Only failures to talk to the operator at all (broken output) are
/// returned as errors; everything a check does is captured in the outcome.
pub async fn run_checks(
    checks: &[Box<dyn Check>],
    operator: &mut dyn Operator,
    options: &RunOptions,
) -> Result<RunOutcome> {
    let mut results = ResultSet::new();
    let mut interrupted = false;

    for (i, check) in checks.iter().enumerate() {
        let name = check.name();
        print_header(operator, check.as_ref())?;
        tracing::debug!(check = name, "Starting check {}/{}", i + 1, checks.len());

        let verdict = AssertUnwindSafe(check.run(&mut *operator))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(Error::check_failed(name, &panic_message(&*panic))));

        match verdict {
            Ok(passed) => {
                tracing::debug!(check = name, passed, "Check finished");
                results.record(name, passed);
            }
            Err(Error::Cancelled) => {
                interrupted = true;
                break;
            }
            Err(e) => {
                tracing::warn!(check = name, "Check errored: {}", e);
                operator.failure(&format!("Test '{}' encountered an error: {}", name, e))?;
                results.record(name, false);
            }
        }

        if options.pause_between_checks && i + 1 < checks.len() {
            match operator
                .acknowledge("\nPress Enter to continue to the next test...")
                .await
            {
                Ok(()) => operator.blank()?,
                Err(Error::Cancelled) => {
                    interrupted = true;
                    break;
                }
                // The reply is ignored, so an unreadable one still counts as Enter
                Err(e) => {
                    tracing::warn!("Unreadable reply at pause, continuing: {}", e);
                    operator.blank()?;
                }
            }
        }
    }

    if interrupted {
        operator.blank()?;
        operator.say(&"Test interrupted by user.".yellow().to_string())?;
        tracing::info!("Run interrupted after {} check(s)", results.len());
    }

    Ok(RunOutcome {
        results,
        interrupted,
    })
}

/// Run the checks and stamp the outcome into a [`Report`]
pub async fn run_suite(
    checks: &[Box<dyn Check>],
    operator: &mut dyn Operator,
    options: &RunOptions,
    client: &str,
) -> Result<Report> {
    let started_at = Local::now();
    tracing::info!("Running {} check(s) against {}", checks.len(), client);

    let outcome = run_checks(checks, operator, options).await?;

    Ok(Report {
        client: client.to_string(),
        started_at,
        finished_at: Local::now(),
        interrupted: outcome.interrupted,
        results: outcome.results,
    })
}

fn print_header(operator: &mut dyn Operator, check: &dyn Check) -> Result<()> {
    operator.say(&format!("{} {}", "TEST:".blue().bold(), check.name().white().bold()))?;
    operator.say(&format!("{} {}", "Description:".cyan(), check.description()))?;
    operator.say(&"-".repeat(40))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::catalog;
    use crate::operator::{scripted, Console, Interrupt};
    use async_trait::async_trait;

    /// A check with a fixed behavior that never reads input
    struct Fixed {
        name: &'static str,
        behavior: Behavior,
    }

    enum Behavior {
        Pass,
        Fail,
        Error,
        Panic,
        Cancel,
    }

    #[async_trait]
    impl Check for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "fixed"
        }

        async fn run(&self, _operator: &mut dyn Operator) -> Result<bool> {
            match self.behavior {
                Behavior::Pass => Ok(true),
                Behavior::Fail => Ok(false),
                Behavior::Error => Err(Error::check_failed(self.name, "malformed input")),
                Behavior::Panic => panic!("check exploded"),
                Behavior::Cancel => Err(Error::Cancelled),
            }
        }
    }

    fn fixed(name: &'static str, behavior: Behavior) -> Box<dyn Check> {
        Box::new(Fixed { name, behavior })
    }

    fn no_pause() -> RunOptions {
        RunOptions {
            pause_between_checks: false,
        }
    }

    #[tokio::test]
    async fn test_full_run_records_every_check() {
        let checks = catalog("Cursor");
        // Inference asks two questions; gates between the eight checks
        let mut console = scripted("y\n\ny\n\nn\n\ny\n\ny\ny\n\nn\n\ny\n\nn\n");

        let outcome = run_checks(&checks, &mut console, &RunOptions::default())
            .await
            .unwrap();

        assert!(!outcome.interrupted);
        assert_eq!(outcome.results.len(), checks.len());
        let summary = outcome.results.summary();
        assert_eq!(summary.passed + summary.failed, checks.len());
        assert_eq!(summary.passed, 5);
        assert_eq!(summary.pass_rate_display(), "62.5%");
        assert_eq!(outcome.results.get("Model Information"), Some(false));
    }

    #[tokio::test]
    async fn test_no_gate_after_last_check() {
        let checks = vec![fixed("a", Behavior::Pass), fixed("b", Behavior::Pass)];
        let mut console = scripted("\n");

        let outcome = run_checks(&checks, &mut console, &RunOptions::default())
            .await
            .unwrap();

        assert!(!outcome.interrupted);
        assert_eq!(console.output().matches("Press Enter").count(), 1);
    }

    #[tokio::test]
    async fn test_error_is_recorded_as_failure_and_run_continues() {
        let checks = vec![
            fixed("first", Behavior::Pass),
            fixed("broken", Behavior::Error),
            fixed("last", Behavior::Pass),
        ];
        let mut console = scripted("");

        let outcome = run_checks(&checks, &mut console, &no_pause()).await.unwrap();

        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.results.get("broken"), Some(false));
        assert_eq!(outcome.results.get("last"), Some(true));
        assert!(console
            .output()
            .contains("Test 'broken' encountered an error"));
    }

    #[tokio::test]
    async fn test_panic_is_recorded_as_failure_and_run_continues() {
        let checks = vec![fixed("boom", Behavior::Panic), fixed("after", Behavior::Pass)];
        let mut console = scripted("");

        let outcome = run_checks(&checks, &mut console, &no_pause()).await.unwrap();

        assert_eq!(outcome.results.get("boom"), Some(false));
        assert_eq!(outcome.results.get("after"), Some(true));
        assert!(console.output().contains("check exploded"));
    }

    #[tokio::test]
    async fn test_cancel_inside_check_keeps_partial_results() {
        let checks = vec![
            fixed("one", Behavior::Pass),
            fixed("two", Behavior::Fail),
            fixed("three", Behavior::Pass),
            fixed("four", Behavior::Cancel),
            fixed("five", Behavior::Pass),
        ];
        let mut console = scripted("");

        let outcome = run_checks(&checks, &mut console, &no_pause()).await.unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.results.get("four"), None);
        assert_eq!(outcome.results.summary().passed, 2);
        assert!(console.output().contains("Test interrupted by user."));
    }

    #[tokio::test]
    async fn test_input_ending_after_three_checks() {
        let checks = catalog("Cursor");
        // Three answered checks and their gates, then input closes
        let mut console = scripted("y\n\nn\n\ny\n\n");

        let outcome = run_checks(&checks, &mut console, &RunOptions::default())
            .await
            .unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.results.get("Dataset Search"), None);
    }

    #[tokio::test]
    async fn test_cancel_at_gate_keeps_completed_check() {
        let checks = vec![fixed("a", Behavior::Pass), fixed("b", Behavior::Pass)];
        let mut console = scripted("");

        let outcome = run_checks(&checks, &mut console, &RunOptions::default())
            .await
            .unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results.get("a"), Some(true));
    }

    #[tokio::test]
    async fn test_unreadable_reply_at_pause_keeps_results() {
        let checks = catalog("Cursor");
        // Invalid UTF-8 where Enter is expected, then one more answered check
        let mut console = Console::new(&b"y\n\xff\ny\n\n"[..], Vec::new(), Interrupt::never());

        let outcome = run_checks(&checks, &mut console, &RunOptions::default())
            .await
            .unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results.get("Basic MCP Integration"), Some(true));
        assert_eq!(outcome.results.get("Model Search"), Some(true));
    }

    #[tokio::test]
    async fn test_run_suite_builds_report() {
        let checks = vec![fixed("a", Behavior::Pass), fixed("b", Behavior::Fail)];
        let mut console = scripted("");

        let report = run_suite(&checks, &mut console, &no_pause(), "Zed")
            .await
            .unwrap();

        assert_eq!(report.client, "Zed");
        assert!(!report.interrupted);
        assert!(report.finished_at >= report.started_at);
        assert_eq!(report.summary().failed, 1);
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42u8), "panicked");
    }
}
