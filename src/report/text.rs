//! Human-readable report

use std::io::{self, Write};

use colored::Colorize;

use super::{Report, Verdict};

const RULE_WIDTH: usize = 60;

/// Write the end-of-run report
pub fn render(report: &Report, out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let summary = report.summary();

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", "TEST REPORT".bold())?;
    writeln!(out, "{}", rule)?;

    if report.interrupted {
        writeln!(
            out,
            "{}",
            format!("Run interrupted after {} check(s)", summary.total).yellow()
        )?;
    }
    writeln!(out, "Total Tests: {}", summary.total)?;
    writeln!(out, "Passed: {}", summary.passed)?;
    writeln!(out, "Failed: {}", summary.failed)?;
    writeln!(out, "Success Rate: {}", summary.pass_rate_display())?;
    writeln!(out)?;

    writeln!(out, "Detailed Results:")?;
    for outcome in report.results.iter() {
        let status = if outcome.passed {
            "✓ PASS".green()
        } else {
            "✗ FAIL".red()
        };
        writeln!(out, "  {}: {}", outcome.name, status)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule)?;

    match summary.verdict() {
        Some(Verdict::AllPassed) => writeln!(
            out,
            "{}",
            "ALL TESTS PASSED! Your Hugging Face MCP server is working perfectly!"
                .green()
                .bold()
        )?,
        Some(Verdict::MostlyWorking) => writeln!(
            out,
            "{}",
            "MOSTLY WORKING: Most features are functional, but some need attention.".yellow()
        )?,
        Some(Verdict::NeedsWork) => writeln!(
            out,
            "{}",
            "NEEDS WORK: Several features are not working properly.".red()
        )?,
        None => writeln!(out, "No checks were completed.")?,
    }

    writeln!(out)?;
    writeln!(out, "Troubleshooting Tips:")?;
    for tip in report.troubleshooting() {
        writeln!(out, "- {}", tip)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "For more help, check the README.md file or Hugging Face documentation."
    )?;
    Ok(())
}
