//! Live-updating palette feeds.
//!
//! A feed owns one sampler thread that re-evaluates the interpolator on a
//! fixed interval and publishes into a shared cell. Consumers read the cell
//! at whatever rate they like; dropping the feed stops the thread.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::clock::Clock;
use crate::interpolate::{gradient_colors_at, star_color_at};

/// Refresh cadence used when the caller doesn't supply one. Sky transitions
/// span hours, so a 10 s tick keeps them visually continuous for free.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

pub struct LiveFeed<T> {
    value: Arc<Mutex<T>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + 'static> LiveFeed<T> {
    fn start(
        name: &str,
        clock: Arc<dyn Clock>,
        interval: Duration,
        sample: impl Fn(f32) -> T + Send + 'static,
    ) -> Self {
        // First value is computed synchronously so `get` is valid immediately.
        let value = Arc::new(Mutex::new(sample(clock.fractional_hour())));
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let cell = Arc::clone(&value);
        let thread = std::thread::spawn(move || loop {
            match shutdown_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let next = sample(clock.fractional_hour());
                    if let Ok(mut slot) = cell.lock() {
                        *slot = next;
                    }
                }
                // Shutdown message, or the handle was leaked and dropped.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        log::debug!("{name} feed started, refreshing every {interval:?}");

        Self {
            value,
            shutdown_tx: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Snapshot of the most recently published value.
    pub fn get(&self) -> T {
        match self.value.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<T> Drop for LiveFeed<T> {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Subscribe to the five-stop sky gradient, refreshed every `interval`.
pub fn subscribe_gradient(clock: Arc<dyn Clock>, interval: Duration) -> LiveFeed<[String; 5]> {
    LiveFeed::start("gradient", clock, interval, gradient_colors_at)
}

/// Subscribe to the star tint, refreshed every `interval`.
pub fn subscribe_star(clock: Arc<dyn Clock>, interval: Duration) -> LiveFeed<String> {
    LiveFeed::start("star", clock, interval, star_color_at)
}
