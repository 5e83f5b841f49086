use chrono::Utc;
#[cfg(test)]
use std::sync::atomic::{AtomicI64, Ordering};
#[cfg(test)]
use std::sync::Arc;
use std::time::Instant;

/// Source of wall-clock time for playback, in integer milliseconds
pub trait PlaybackClock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Monotonic clock expressed as UTC epoch milliseconds.
///
/// The UTC reading is taken once at construction; after that time only moves
/// forward with `Instant`, so system clock steps never reach playback.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch_millis: i64,
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch_millis: Utc::now().timestamp_millis(),
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock for SystemClock {
    fn now_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.epoch_millis.saturating_add(elapsed)
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the code under test.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_millis)),
        }
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl PlaybackClock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
