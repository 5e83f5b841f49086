pub mod clock;
pub mod engine;
pub mod series;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{PlaybackClock, SystemClock};
pub use engine::PlaybackEngine;
pub use series::SampleSeries;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    /// No samples loaded (never initialized, or the load failed)
    Uninitialized,
    /// Waiting to advance past `index`
    Ready { index: usize },
    /// Sitting on the last sample; nothing left to advance to
    Exhausted,
}

/// Default playback configuration
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    pub speed: f64,  // 1.0 = real-time, 2.0 = 2x speed
    pub paused: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
        }
    }
}
