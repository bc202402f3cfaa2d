//! Verification checks
//!
//! A check is one named step the operator verifies by hand in the chat
//! client. All built-in checks share one shape ([`ManualCheck`]): show
//! instructions, optionally ask a gating question, then ask whether the
//! expected behavior was observed.
//!
//! Checks never decide anything themselves; the verdict is the operator's
//! answer. An `Err` from [`Check::run`] means the check itself broke and is
//! handled by the runner.

mod catalog;

pub use catalog::{catalog, BASIC_INTEGRATION, INFERENCE};

use async_trait::async_trait;

use crate::common::{Error, Result};
use crate::operator::{is_no, Operator};

/// One named verification step
#[async_trait]
pub trait Check: Send + Sync {
    /// Unique name, used as the key in the result set
    fn name(&self) -> &str;

    /// One-line summary shown in the check header
    fn description(&self) -> &str;

    /// Walk the operator through the check and return the verdict
    async fn run(&self, operator: &mut dyn Operator) -> Result<bool>;
}

/// Preliminary question that can make a check not applicable
#[derive(Debug, Clone)]
pub struct Gate {
    /// Asked first; only an explicit `n` skips the main question
    pub question: &'static str,
    /// Shown as an info notice when skipped
    pub skip_notice: &'static str,
    /// Extra lines shown when skipped
    pub skip_advice: &'static [&'static str],
}

/// A check driven entirely by static text
///
/// Text may contain `{client}`, replaced by the chat client name.
#[derive(Debug, Clone)]
pub struct ManualCheck {
    pub name: &'static str,
    pub description: &'static str,
    /// Printed line by line before any question
    pub instructions: &'static [&'static str],
    pub gate: Option<Gate>,
    pub question: &'static str,
    pub on_pass: &'static str,
    pub on_fail: &'static str,
    /// Printed after the failure notice
    pub fail_advice: &'static [&'static str],
    pub client: String,
}

impl ManualCheck {
    fn render(&self, text: &str) -> String {
        text.replace("{client}", &self.client)
    }
}

#[async_trait]
impl Check for ManualCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn run(&self, operator: &mut dyn Operator) -> Result<bool> {
        for line in self.instructions {
            operator.say(&self.render(line))?;
        }

        if let Some(gate) = &self.gate {
            let prompt = format!("{} (y/n): ", self.render(gate.question));
            if is_no(&operator.ask(&prompt).await?) {
                tracing::debug!(check = self.name, "Gate declined, not applicable");
                operator.info(gate.skip_notice)?;
                for line in gate.skip_advice {
                    operator.say(&self.render(line))?;
                }
                return Ok(true);
            }
        }

        let passed = operator.confirm(&self.render(self.question)).await?;
        if passed {
            operator.success(self.on_pass)?;
        } else {
            operator.failure(self.on_fail)?;
            for line in self.fail_advice {
                operator.say(&self.render(line))?;
            }
        }
        Ok(passed)
    }
}

/// Narrow `checks` to the named ones, keeping catalog order
///
/// Names match case-insensitively. An empty `only` keeps everything.
pub fn select(checks: Vec<Box<dyn Check>>, only: &[String]) -> Result<Vec<Box<dyn Check>>> {
    if only.is_empty() {
        return Ok(checks);
    }

    for wanted in only {
        if !checks.iter().any(|c| c.name().eq_ignore_ascii_case(wanted)) {
            let available: Vec<&str> = checks.iter().map(|c| c.name()).collect();
            return Err(Error::unknown_check(wanted, &available));
        }
    }

    Ok(checks
        .into_iter()
        .filter(|c| only.iter().any(|wanted| c.name().eq_ignore_ascii_case(wanted)))
        .collect())
}
