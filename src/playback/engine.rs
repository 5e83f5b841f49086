use crate::core::{FlightSnapshot, PlaybackProgress, Sample};
use crate::input::LoadError;
use crate::playback::{PlaybackClock, PlaybackConfig, PlaybackState, SampleSeries};
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

/// Replays a recorded flight against wall-clock time.
///
/// Two anchors tie the series to the clock: `last_advance_time` is the instant
/// the current sample became active and `next_advance_time` is the instant the
/// following sample is due. The gap between them is the recorded delta between
/// the two samples divided by the speed multiplier. Pausing slides both
/// anchors forward, speed changes re-anchor so the fraction of the current
/// interval already played is kept, and seeking drops whatever real time
/// passed before it.
pub struct PlaybackEngine {
    clock: Arc<dyn PlaybackClock>,
    series: SampleSeries,
    config: PlaybackConfig,
    current_position: usize,
    last_advance_time: i64,
    next_advance_time: i64,
    last_tick_time: i64,
}

impl PlaybackEngine {
    /// Create an engine with no data loaded
    pub fn new(clock: Arc<dyn PlaybackClock>) -> Self {
        Self {
            clock,
            series: SampleSeries::empty(),
            config: PlaybackConfig::default(),
            current_position: 0,
            last_advance_time: 0,
            next_advance_time: 0,
            last_tick_time: 0,
        }
    }

    /// Load a series and start playback from its first sample.
    ///
    /// An empty series leaves the engine without data; every query then
    /// returns `None`. Pause state and speed survive re-initialization.
    pub fn initialize(&mut self, series: SampleSeries) {
        self.series = series;
        self.current_position = 0;

        if self.series.is_empty() {
            debug!("Playback initialized without samples");
            return;
        }

        self.reanchor();
        debug!(
            "Playback initialized with {} samples at {}x",
            self.series.len(),
            self.config.speed
        );
    }

    /// Initialize from the outcome of loading `source`.
    ///
    /// A failed load is logged and becomes an empty series. Returns whether
    /// any samples were loaded.
    pub fn initialize_loaded(&mut self, source: &str, loaded: Result<SampleSeries, LoadError>) -> bool {
        let series = match loaded {
            Ok(series) => series,
            Err(e) => {
                error!("Failed to load flight data from {}: {}", source, e);
                SampleSeries::empty()
            }
        };
        self.initialize(series);
        !self.series.is_empty()
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        if self.series.is_empty() {
            PlaybackState::Uninitialized
        } else if self.can_advance() {
            PlaybackState::Ready {
                index: self.current_position,
            }
        } else {
            PlaybackState::Exhausted
        }
    }

    /// Get current playback position (index into the series)
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.current_position
    }

    /// Get current playback speed
    #[cfg(test)]
    pub fn speed(&self) -> f64 {
        self.config.speed
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    /// Sample at the current position
    pub fn current_sample(&self) -> Option<&Sample> {
        self.series.get(self.current_position)
    }

    /// Heartbeat. Moves at most one sample forward per call.
    pub fn tick(&mut self) {
        if !self.can_advance() {
            return;
        }

        let now = self.read_clock();
        let elapsed = now - self.last_tick_time;
        self.last_tick_time = now;

        if self.config.paused {
            self.last_advance_time += elapsed;
            self.next_advance_time += elapsed;
            return;
        }

        if now >= self.next_advance_time {
            self.current_position += 1;
            self.last_advance_time = now;
            self.schedule_next_advance();

            match self.state() {
                PlaybackState::Ready { index } => trace!("Advanced to sample {}", index),
                PlaybackState::Exhausted => {
                    info!("Playback reached the last of {} samples", self.series.len())
                }
                PlaybackState::Uninitialized => {}
            }
        }
    }

    /// Pause or resume playback.
    ///
    /// Real time spent paused is folded into the anchors when the pause ends,
    /// even if no tick ran in between.
    pub fn set_paused(&mut self, paused: bool) {
        if self.config.paused == paused {
            return;
        }

        let now = self.read_clock();
        self.settle_paused_time(now);
        self.config.paused = paused;
    }

    /// Change playback speed, keeping the progress through the current interval.
    ///
    /// With no data, or on the last sample, the multiplier is only stored and
    /// applies once anchors are next established.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            warn!("Ignoring invalid speed multiplier {}", multiplier);
            return;
        }

        if !self.can_advance() {
            self.config.speed = multiplier;
            return;
        }

        let now = self.read_clock();
        self.settle_paused_time(now);

        // Recorded time already played through the current interval
        let elapsed_recorded = ((now - self.last_advance_time) as f64 * self.config.speed).round();

        self.config.speed = multiplier;
        self.last_advance_time = now - (elapsed_recorded / multiplier).round() as i64;
        self.schedule_next_advance();
    }

    /// Jump to a fraction of the flight, 0.0 = first sample, 1.0 = last.
    ///
    /// Out of range values are clamped. Anchors restart at now, so no
    /// catch-up happens after the jump.
    pub fn seek(&mut self, percentage: f64) {
        let Some(last) = self.series.last_index() else {
            return;
        };

        let fraction = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 1.0)
        };
        let index = (fraction * last as f64).round() as usize;
        self.current_position = index.min(last);
        self.reanchor();

        info!("Seek performed to index {} ({})", self.current_position, percentage);
    }

    /// Restart from the first sample
    pub fn reset(&mut self) {
        if self.series.is_empty() {
            return;
        }
        self.current_position = 0;
        self.reanchor();
    }

    /// Progress metadata, or `None` without data
    pub fn progress(&self) -> Option<PlaybackProgress> {
        let last = self.series.last_index()?;

        let percentage = if last == 0 {
            0.0
        } else {
            round_to_4_places(self.current_position as f64 / last as f64)
        };

        Some(PlaybackProgress {
            current_index: self.current_position,
            total_samples: self.series.len(),
            percentage,
            start_time: self.series.start_time()?,
            end_time: self.series.end_time()?,
        })
    }

    /// Current sample merged with progress, or `None` without data
    pub fn current_snapshot(&self) -> Option<FlightSnapshot> {
        let sample = self.current_sample()?;
        Some(FlightSnapshot::from_sample(sample, self.progress()?))
    }

    /// Wall time left before the next sample is due.
    ///
    /// `None` without data or on the last sample. While paused the value is
    /// frozen at what it was when the pause began.
    #[cfg(test)]
    pub fn millis_until_next_advance(&self) -> Option<i64> {
        if !self.can_advance() {
            return None;
        }

        let reference = if self.config.paused {
            self.last_tick_time
        } else {
            self.clock.now_millis()
        };
        Some(self.next_advance_time - reference)
    }

    fn can_advance(&self) -> bool {
        self.series
            .last_index()
            .is_some_and(|last| self.current_position < last)
    }

    /// Read the clock, absorbing a backwards step into the anchors so the
    /// wait left on the current sample is unchanged.
    fn read_clock(&mut self) -> i64 {
        let now = self.clock.now_millis();
        let step = now - self.last_tick_time;

        if step < 0 && self.can_advance() {
            warn!("Playback clock stepped back {} ms, shifting anchors", -step);
            self.last_advance_time += step;
            self.next_advance_time += step;
            self.last_tick_time = now;
        }
        now
    }

    /// Restart both anchors and the tick reference at now
    fn reanchor(&mut self) {
        let now = self.clock.now_millis();
        self.last_advance_time = now;
        self.last_tick_time = now;
        self.schedule_next_advance();
    }

    /// Slide the anchors over any paused time not yet seen by `tick`
    fn settle_paused_time(&mut self, now: i64) {
        if self.config.paused {
            let elapsed = now - self.last_tick_time;
            self.last_advance_time += elapsed;
            self.next_advance_time += elapsed;
        }
        self.last_tick_time = now;
    }

    fn schedule_next_advance(&mut self) {
        if let Some(delta) = self.series.delta_millis(self.current_position) {
            self.next_advance_time = self.last_advance_time + scale_to_wall(delta, self.config.speed);
        }
    }
}

/// Recorded milliseconds to wall milliseconds at `speed`, rounded to nearest
fn scale_to_wall(delta_millis: i64, speed: f64) -> i64 {
    (delta_millis as f64 / speed).round() as i64
}

fn round_to_4_places(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AirSpeed, Altitude, Attitude, Position};
    use crate::playback::ManualClock;
    use proptest::prelude::*;

    const START: i64 = 1_767_268_800_000;

    fn sample(timestamp: i64, speed: f64) -> Sample {
        Sample {
            timestamp,
            attitude: Attitude { pitch: 0.0, roll: 0.0, yaw: 90.0 },
            altitude: Altitude::new(1000.0),
            air_speed: AirSpeed { speed },
            position: Position { latitude: 60.3172, longitude: 24.9633 },
        }
    }

    /// Three samples one second apart at 100, 200 and 300 kt
    fn three_samples() -> SampleSeries {
        SampleSeries::new(vec![
            sample(1000, 100.0),
            sample(2000, 200.0),
            sample(3000, 300.0),
        ])
    }

    fn series_from_deltas(deltas: &[i64]) -> SampleSeries {
        let mut timestamp = 0;
        let mut samples = vec![sample(timestamp, 0.0)];
        for (i, delta) in deltas.iter().enumerate() {
            timestamp += delta;
            samples.push(sample(timestamp, (i + 1) as f64));
        }
        SampleSeries::new(samples)
    }

    fn engine() -> (PlaybackEngine, ManualClock) {
        let clock = ManualClock::new(START);
        let engine = PlaybackEngine::new(Arc::new(clock.clone()));
        (engine, clock)
    }

    fn airspeed(engine: &PlaybackEngine) -> f64 {
        engine.current_snapshot().unwrap().air_speed.speed
    }

    #[test]
    fn test_initialize_returns_first_snapshot() {
        let (mut engine, _clock) = engine();
        engine.initialize(three_samples());

        let snapshot = engine.current_snapshot().unwrap();
        assert_eq!(snapshot.air_speed.speed, 100.0);
        assert_eq!(snapshot.position.latitude, 60.3172);
        assert_eq!(engine.state(), PlaybackState::Ready { index: 0 });
    }

    #[test]
    fn test_empty_series_returns_no_data() {
        let (mut engine, clock) = engine();
        engine.initialize(SampleSeries::empty());

        assert_eq!(engine.state(), PlaybackState::Uninitialized);
        assert!(engine.current_snapshot().is_none());
        assert!(engine.progress().is_none());
        assert!(engine.millis_until_next_advance().is_none());

        clock.advance(5_000);
        engine.tick();
        engine.seek(0.5);
        engine.reset();
        engine.set_paused(true);
        assert!(engine.current_snapshot().is_none());
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let (mut engine, _clock) = engine();
        engine.initialize(three_samples());

        let loaded = engine.initialize_loaded(
            "missing.csv",
            Err(LoadError::MissingColumn("Timestamp".to_string())),
        );

        assert!(!loaded);
        assert!(engine.current_snapshot().is_none());
        assert_eq!(engine.state(), PlaybackState::Uninitialized);
    }

    #[test]
    fn test_advances_when_time_passes() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(1100);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);

        engine.seek(1.0);
        assert_eq!(airspeed(&engine), 300.0);
        assert_eq!(engine.state(), PlaybackState::Exhausted);

        engine.seek(0.0);
        assert_eq!(airspeed(&engine), 100.0);
    }

    #[test]
    fn test_does_not_advance_before_interval() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(999);
        engine.tick();
        assert_eq!(engine.position(), 0);

        clock.advance(1);
        engine.tick();
        assert_eq!(engine.position(), 1);
    }

    #[test]
    fn test_single_step_per_tick() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        // Two full intervals elapsed, one tick
        clock.advance(2500);
        engine.tick();
        assert_eq!(engine.position(), 1);

        // Next interval is measured from the advance, not from the original schedule
        assert_eq!(engine.millis_until_next_advance(), Some(1000));
    }

    #[test]
    fn test_stays_on_last_sample() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        for _ in 0..10 {
            clock.advance(1000);
            engine.tick();
        }

        assert_eq!(engine.position(), 2);
        assert_eq!(engine.state(), PlaybackState::Exhausted);
        assert!(engine.millis_until_next_advance().is_none());
    }

    #[test]
    fn test_not_advancing_while_paused() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());
        engine.set_paused(true);

        clock.advance(10_000);
        engine.tick();

        assert_eq!(airspeed(&engine), 100.0);
        assert!(engine.is_paused());
    }

    #[test]
    fn test_resumes_with_remaining_wait_after_pause() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(500);
        engine.tick();

        engine.set_paused(true);
        clock.advance(10_000);
        engine.tick();
        assert_eq!(airspeed(&engine), 100.0);

        engine.set_paused(false);
        clock.advance(400);
        engine.tick();
        assert_eq!(airspeed(&engine), 100.0);

        clock.advance(200);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_pause_without_intervening_tick() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(300);
        engine.set_paused(true);
        clock.advance(60_000);
        engine.set_paused(false);

        assert_eq!(engine.millis_until_next_advance(), Some(700));

        clock.advance(699);
        engine.tick();
        assert_eq!(engine.position(), 0);
        clock.advance(1);
        engine.tick();
        assert_eq!(engine.position(), 1);
    }

    #[test]
    fn test_time_before_pause_counts_as_progress() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        // No tick between start and pause
        clock.advance(600);
        engine.set_paused(true);
        clock.advance(5_000);
        engine.tick();
        engine.set_paused(false);

        assert_eq!(engine.millis_until_next_advance(), Some(400));
    }

    #[test]
    fn test_speed_multiplier_shortens_interval() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());
        engine.set_speed_multiplier(2.0);

        clock.advance(600);
        engine.tick();

        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_speed_change_mid_interval_keeps_progress() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(500);
        engine.tick();

        // Remaining 500 ms at 1x becomes 250 ms at 2x
        engine.set_speed_multiplier(2.0);
        assert_eq!(engine.millis_until_next_advance(), Some(250));

        clock.advance(300);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_speed_change_while_paused_ignores_paused_time() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(200);
        engine.set_paused(true);
        clock.advance(3_000);
        engine.set_speed_multiplier(4.0);
        engine.set_paused(false);

        // 800 ms of recorded time left, played at 4x
        assert_eq!(engine.millis_until_next_advance(), Some(200));
    }

    #[test]
    fn test_speed_set_before_initialize_is_kept() {
        let (mut engine, clock) = engine();
        engine.set_speed_multiplier(4.0);

        engine.initialize(three_samples());
        assert_eq!(engine.millis_until_next_advance(), Some(250));

        clock.advance(300);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_speed_set_at_end_is_kept_after_reset() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        engine.seek(1.0);
        engine.set_speed_multiplier(2.0);
        assert_eq!(engine.speed(), 2.0);

        engine.reset();
        clock.advance(600);
        engine.tick();

        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_invalid_speed_is_ignored() {
        let (mut engine, _clock) = engine();
        engine.initialize(three_samples());

        engine.set_speed_multiplier(0.0);
        engine.set_speed_multiplier(-1.0);
        engine.set_speed_multiplier(f64::NAN);

        assert_eq!(engine.speed(), 1.0);
        assert_eq!(engine.millis_until_next_advance(), Some(1000));
    }

    #[test]
    fn test_seek_clamps_out_of_range() {
        let (mut engine, _clock) = engine();
        engine.initialize(three_samples());

        engine.seek(2.0);
        assert_eq!(airspeed(&engine), 300.0);

        engine.seek(-0.5);
        assert_eq!(airspeed(&engine), 100.0);

        engine.seek(f64::NAN);
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn test_seek_discards_elapsed_time() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(5_000);
        engine.seek(0.0);
        engine.tick();

        assert_eq!(engine.position(), 0);
        assert_eq!(engine.millis_until_next_advance(), Some(1000));

        clock.advance(1100);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);
    }

    #[test]
    fn test_seek_while_paused_drops_paused_time() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());
        engine.set_paused(true);

        clock.advance(4_000);
        engine.seek(0.5);
        engine.set_paused(false);

        assert_eq!(engine.position(), 1);
        assert_eq!(engine.millis_until_next_advance(), Some(1000));
    }

    #[test]
    fn test_reset_returns_to_start() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(1500);
        engine.tick();
        assert_eq!(airspeed(&engine), 200.0);

        engine.reset();
        assert_eq!(airspeed(&engine), 100.0);
        assert_eq!(engine.millis_until_next_advance(), Some(1000));
    }

    #[test]
    fn test_progress() {
        let (mut engine, _clock) = engine();
        engine.initialize(three_samples());

        let progress = engine.progress().unwrap();
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.current_index, 0);
        assert_eq!(progress.total_samples, 3);
        assert_eq!(progress.start_time, 1000);
        assert_eq!(progress.end_time, 3000);

        engine.seek(0.5);
        let progress = engine.progress().unwrap();
        assert_eq!(progress.percentage, 0.5);
        assert_eq!(progress.current_index, 1);
    }

    #[test]
    fn test_progress_rounds_to_four_places() {
        let (mut engine, _clock) = engine();
        engine.initialize(series_from_deltas(&[1000; 3]));

        engine.seek(1.0 / 3.0);
        assert_eq!(engine.progress().unwrap().percentage, 0.3333);
    }

    #[test]
    fn test_single_sample_series() {
        let (mut engine, clock) = engine();
        engine.initialize(SampleSeries::new(vec![sample(1000, 150.0)]));

        assert_eq!(engine.state(), PlaybackState::Exhausted);
        assert_eq!(engine.progress().unwrap().percentage, 0.0);

        clock.advance(10_000);
        engine.tick();
        engine.seek(1.0);
        assert_eq!(airspeed(&engine), 150.0);
    }

    #[test]
    fn test_snapshot_is_idempotent_without_tick() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(5_000);
        let first = engine.current_snapshot();
        let second = engine.current_snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_delta_samples_advance_on_next_tick() {
        let (mut engine, clock) = engine();
        engine.initialize(series_from_deltas(&[0, 1000]));

        engine.tick();
        assert_eq!(engine.position(), 1);

        clock.advance(1000);
        engine.tick();
        assert_eq!(engine.position(), 2);
    }

    #[test]
    fn test_clock_stepping_back_does_not_stall() {
        let (mut engine, clock) = engine();
        engine.initialize(series_from_deltas(&[1000, 1000]));
        engine.tick();

        clock.advance(400);
        engine.tick();
        assert_eq!(engine.millis_until_next_advance(), Some(600));

        clock.set(START - 60_000);
        engine.tick();
        assert_eq!(engine.millis_until_next_advance(), Some(600));

        for _ in 0..12 {
            clock.advance(50);
            engine.tick();
        }
        assert_eq!(engine.position(), 1);

        for _ in 0..20 {
            clock.advance(50);
            engine.tick();
        }
        assert_eq!(engine.position(), 2);
    }

    #[test]
    fn test_clock_stepping_back_while_paused() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(300);
        engine.set_paused(true);
        clock.set(START - 60_000);
        engine.tick();
        clock.advance(5_000);
        engine.tick();
        engine.set_paused(false);

        assert_eq!(engine.position(), 0);
        assert_eq!(engine.millis_until_next_advance(), Some(700));
    }

    #[test]
    fn test_speed_change_after_clock_step_back() {
        let (mut engine, clock) = engine();
        engine.initialize(three_samples());

        clock.advance(500);
        engine.tick();
        clock.set(START - 10_000);
        engine.set_speed_multiplier(2.0);

        assert_eq!(engine.millis_until_next_advance(), Some(250));
    }

    proptest! {
        #[test]
        fn prop_seek_index(len in 1usize..500, percentage in -0.5f64..1.5) {
            let (mut engine, _clock) = engine();
            engine.initialize(series_from_deltas(&vec![100; len - 1]));

            engine.seek(percentage);

            let last = (len - 1) as f64;
            let expected = (percentage.clamp(0.0, 1.0) * last).round() as usize;
            prop_assert_eq!(engine.position(), expected.min(len - 1));
        }

        #[test]
        fn prop_pause_preserves_remaining_wait(
            before in 0i64..1000,
            paused_for in 0i64..1_000_000,
            ticks in 0usize..5,
        ) {
            let (mut engine, clock) = engine();
            engine.initialize(three_samples());

            clock.advance(before);
            engine.tick();
            let remaining = engine.millis_until_next_advance();

            engine.set_paused(true);
            for _ in 0..ticks {
                clock.advance(paused_for / 5);
                engine.tick();
            }
            clock.advance(paused_for - (paused_for / 5) * ticks as i64);
            engine.tick();
            prop_assert_eq!(engine.position(), 0);

            engine.set_paused(false);
            prop_assert_eq!(engine.millis_until_next_advance(), remaining);
        }

        #[test]
        fn prop_speed_change_scales_remaining_wait(
            interval in 1i64..20,
            waited_fraction in 0i64..20,
            multiplier in prop::sample::select(vec![0.5, 2.0, 4.0, 5.0, 10.0]),
        ) {
            // Interval and wait are multiples of 100 ms so the scaled values are exact
            let length = interval * 100;
            let waited = (waited_fraction % interval) * 100;

            let (mut engine, clock) = engine();
            engine.initialize(series_from_deltas(&[length, length]));

            clock.advance(waited);
            engine.tick();
            engine.set_speed_multiplier(multiplier);

            let expected = ((length - waited) as f64 / multiplier).round() as i64;
            prop_assert_eq!(engine.millis_until_next_advance(), Some(expected));
        }

        #[test]
        fn prop_no_long_run_drift(
            deltas in prop::collection::vec(0i64..3000, 1..200),
            multiplier in 0.25f64..8.0,
        ) {
            let (mut engine, clock) = engine();
            engine.set_speed_multiplier(multiplier);
            engine.initialize(series_from_deltas(&deltas));

            let mut elapsed = 0;
            while let Some(wait) = engine.millis_until_next_advance() {
                let wait = wait.max(0);
                clock.advance(wait);
                elapsed += wait;
                engine.tick();
            }

            let expected: i64 = deltas.iter().map(|d| scale_to_wall(*d, multiplier)).sum();
            prop_assert_eq!(engine.position(), deltas.len());
            prop_assert_eq!(elapsed, expected);
        }
    }
}
