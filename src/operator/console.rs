//! Console operator over an async line reader and a writer

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use super::{Interrupt, Operator};
use crate::common::{Error, Result};

/// Operator conversation over a line reader and an output writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    interrupt: Interrupt,
}

impl Console<BufReader<Stdin>, std::io::Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio(interrupt: Interrupt) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout(), interrupt)
    }
}

impl<R, W> Console<R, W> {
    pub fn new(reader: R, writer: W, interrupt: Interrupt) -> Self {
        Self {
            reader,
            writer,
            interrupt,
        }
    }
}

#[async_trait]
impl<R, W> Operator for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> Result<String> {
        if self.interrupt.is_raised() {
            return Err(Error::Cancelled);
        }

        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = tokio::select! {
            biased;
            _ = self.interrupt.raised() => None,
            read = self.reader.read_line(&mut line) => Some(read),
        };

        match read {
            // End of input means nobody is left to answer
            None | Some(Ok(0)) => {
                writeln!(self.writer)?;
                tracing::debug!("Operator input ended at prompt {:?}", prompt.trim());
                Err(Error::Cancelled)
            }
            Some(Ok(_)) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Some(Err(e)) => Err(Error::Io(e)),
        }
    }
}

/// Console fed from a fixed script, capturing output in memory
#[cfg(test)]
pub(crate) fn scripted(input: &'static str) -> Console<&'static [u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new(), Interrupt::never())
}

#[cfg(test)]
impl<R> Console<R, Vec<u8>> {
    pub(crate) fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}
