//! Operator interaction
//!
//! Every check talks to the human operator through the [`Operator`] trait:
//! print instructions, ask a yes/no question, wait for Enter. The
//! [`Console`] implementation reads lines from any async buffered reader,
//! which is stdin in the binary and an in-memory script in tests.

mod console;
mod interrupt;

pub use console::Console;
#[cfg(test)]
pub(crate) use console::scripted;
pub use interrupt::{Interrupt, InterruptHandle};

use async_trait::async_trait;
use colored::Colorize;

use crate::common::Result;

/// Interpret an operator answer: only `y` (any case, surrounding
/// whitespace ignored) counts as yes
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Interpret an answer as an explicit no: only `n`, same normalization
///
/// Used where a mistyped answer must not count as declining.
pub fn is_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}

/// A line-oriented conversation with the operator
///
/// Reads fail with [`Error::Cancelled`](crate::common::Error::Cancelled)
/// when the operator interrupts or closes input.
#[async_trait]
pub trait Operator: Send {
    /// Show one line of text
    fn say(&mut self, text: &str) -> Result<()>;

    /// Show `prompt` without a line break and read the operator's reply
    async fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question
    async fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n): ", question)).await?;
        Ok(is_yes(&answer))
    }

    /// Block until the operator presses Enter; the reply is ignored
    async fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.ask(prompt).await.map(|_| ())
    }

    /// Show a blank line
    fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", "✓ SUCCESS:".green().bold(), message))
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", "✗ ERROR:".red().bold(), message))
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", "ℹ INFO:".cyan().bold(), message))
    }
}
