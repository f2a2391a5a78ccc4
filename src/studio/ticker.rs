//! Scoped repeating timer.
//!
//! A [`Ticker`] owns a background thread that sends a [`Tick`] every
//! interval. The thread never touches playback state; the owner pulls ticks
//! from the channel on its own thread. Dropping the ticker cancels and joins
//! the thread, so a repeating timer can never outlive its owner.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// One firing of a [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Generation of the ticker that produced this tick
    pub generation: u64,
}

/// Handle to a running repeating timer.
#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start sending `Tick { generation }` on `tick_tx` every `interval`.
    pub fn start(interval: Duration, generation: u64, tick_tx: Sender<Tick>) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(format!("aurex-ticker-{}", generation))
            .spawn(move || {
                tracing::trace!(generation, ?interval, "ticker started");
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tick_tx.send(Tick { generation }).is_err() {
                                // Receiver is gone, nobody is listening anymore
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::trace!(generation, "ticker stopped");
            })?;

        Ok(Self {
            generation,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Dropping the sender wakes the thread even if the send fails
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn ticker_sends_ticks_with_generation() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(2), 7, tx).unwrap();
        assert_eq!(ticker.generation(), 7);

        for _ in 0..3 {
            let tick = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(tick, Tick { generation: 7 });
        }
    }

    #[test]
    fn drop_stops_ticker_and_closes_channel() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(1), 1, tx).unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();

        drop(ticker);

        // The thread owned the only sender; after join the channel drains then closes
        while rx.try_recv().is_ok() {}
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }

    #[test]
    fn drop_is_prompt_for_long_intervals() {
        let (tx, _rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_secs(3600), 1, tx).unwrap();

        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn ticker_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(1), 1, tx).unwrap();
        drop(rx);
        // Join must not hang even though nobody consumed ticks
        drop(ticker);
    }
}
