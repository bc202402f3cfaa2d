//! Operator interrupt signal
//!
//! A Ctrl-C anywhere in the session must reach whichever prompt is
//! currently blocked on input. The signal is a latched flag on a watch
//! channel: once raised it stays raised.

use std::future::Future;
use std::io;

use tokio::sync::watch;

/// Receiving side, held by every reader that can block on the operator
#[derive(Debug, Clone)]
pub struct Interrupt {
    rx: watch::Receiver<bool>,
}

/// Sending side, held by whatever detects the interrupt
#[derive(Debug)]
pub struct InterruptHandle {
    tx: watch::Sender<bool>,
}

impl Interrupt {
    /// Create a linked handle/receiver pair
    pub fn channel() -> (InterruptHandle, Interrupt) {
        let (tx, rx) = watch::channel(false);
        (InterruptHandle { tx }, Interrupt { rx })
    }

    /// An interrupt that never fires
    pub fn never() -> Self {
        let (_handle, interrupt) = Self::channel();
        interrupt
    }

    /// Spawn a listener that raises the interrupt on Ctrl-C
    ///
    /// The first Ctrl-C unwinds the run to its report. A second one exits
    /// the process at once, even while the report is being written.
    /// Must be called from within a tokio runtime.
    pub fn on_ctrl_c() -> Self {
        Self::on_signal(tokio::signal::ctrl_c, || {
            eprintln!("\nInterrupted again. Goodbye!");
            std::process::exit(0);
        })
    }

    /// Spawn a listener that raises the interrupt each time `next_signal`
    /// resolves, calling `on_repeat` for every signal after the first
    pub fn on_signal<S, Fut, R>(mut next_signal: S, mut on_repeat: R) -> Self
    where
        S: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = io::Result<()>> + Send,
        R: FnMut() + Send + 'static,
    {
        let (handle, interrupt) = Self::channel();
        tokio::spawn(async move {
            loop {
                if let Err(e) = next_signal().await {
                    tracing::warn!("Could not listen for Ctrl-C: {}", e);
                    break;
                }
                if handle.is_raised() {
                    tracing::debug!("Repeated interrupt");
                    on_repeat();
                } else {
                    tracing::debug!("Interrupt received");
                    handle.raise();
                }
            }
        });
        interrupt
    }

    /// Whether the interrupt has already been raised
    pub fn is_raised(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the interrupt is raised
    ///
    /// Pends forever if the sending side is gone without raising.
    pub async fn raised(&mut self) {
        let closed = self.rx.wait_for(|raised| *raised).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

impl InterruptHandle {
    /// Raise the interrupt; idempotent
    pub fn raise(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_raised(&self) -> bool {
        *self.tx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::{mpsc, Notify};

    #[tokio::test]
    async fn test_raise_wakes_waiter() {
        let (handle, mut interrupt) = Interrupt::channel();
        assert!(!interrupt.is_raised());

        let waiter = tokio::spawn(async move {
            interrupt.raised().await;
        });
        handle.raise();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_raise_is_latched() {
        let (handle, mut interrupt) = Interrupt::channel();
        handle.raise();
        handle.raise();
        assert!(interrupt.is_raised());
        // Already raised: returns immediately
        tokio::time::timeout(Duration::from_millis(100), interrupt.raised())
            .await
            .expect("raised interrupt should not block");
    }

    #[tokio::test]
    async fn test_every_signal_is_handled() {
        let signals = Arc::new(Notify::new());
        let (repeat_tx, mut repeat_rx) = mpsc::unbounded_channel();

        let source = signals.clone();
        let mut interrupt = Interrupt::on_signal(
            move || {
                let source = source.clone();
                async move {
                    source.notified().await;
                    Ok(())
                }
            },
            move || {
                let _ = repeat_tx.send(());
            },
        );

        signals.notify_one();
        tokio::time::timeout(Duration::from_secs(1), interrupt.raised())
            .await
            .expect("first signal raises the interrupt");

        signals.notify_one();
        tokio::time::timeout(Duration::from_secs(1), repeat_rx.recv())
            .await
            .expect("second signal reaches the repeat hook")
            .unwrap();

        signals.notify_one();
        tokio::time::timeout(Duration::from_secs(1), repeat_rx.recv())
            .await
            .expect("listener keeps listening")
            .unwrap();
    }

    #[tokio::test]
    async fn test_never_stays_pending() {
        let mut interrupt = Interrupt::never();
        let waited = tokio::time::timeout(Duration::from_millis(50), interrupt.raised()).await;
        assert!(waited.is_err());
    }
}
