use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A periodic clock running on its own thread.
///
/// Ticks are queued on a channel and drained by the owner with
/// [`Ticker::drain`], so the owner applies them on its own thread. Dropping
/// the ticker cancels the clock and joins the thread.
pub struct Ticker {
    ticks: Receiver<()>,
    cancel: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking once every `period`.
    pub fn start(period: Duration) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel::<()>();
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let join = thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            break;
                        }
                    }
                    // Explicit cancel or the owner went away.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            ticks: tick_rx,
            cancel: Some(cancel_tx),
            join: Some(join),
        }
    }

    /// Number of ticks that fired since the last call.
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Cancel the clock and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
