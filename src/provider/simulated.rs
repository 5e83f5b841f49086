use super::{FlightDataProvider, ProviderKind};
use crate::core::{FlightSnapshot, NavPoint, PlaybackProgress, Position};
use crate::playback::PlaybackConfig;
use crate::simulation::{AirspeedWalk, AltitudeWalk, AttitudeWalk};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::debug;

/// Simulated aircraft parked over Helsinki-Vantaa (EFHK)
const HOME_POSITION: Position = Position {
    latitude: 60.3172,
    longitude: 24.9633,
};

/// Random-walk flight with its own simulation clock
pub struct SimulatedFlight {
    attitude: AttitudeWalk,
    altitude: AltitudeWalk,
    airspeed: AirspeedWalk,
    rng: StdRng,
    config: PlaybackConfig,
    /// Simulation time in milliseconds
    simulated_time: i64,
    /// Wall time one heartbeat stands for, in milliseconds
    tick_millis: f64,
    waypoints: Vec<NavPoint>,
    active_waypoint_index: usize,
}

impl SimulatedFlight {
    /// Start a simulation at `start_time` ms, seeded from the OS
    pub fn new(start_time: i64, tick_interval: Duration) -> Self {
        Self::with_rng(StdRng::from_entropy(), start_time, tick_interval)
    }

    /// Reproducible simulation for tests
    #[cfg(test)]
    pub fn with_seed(seed: u64, start_time: i64, tick_interval: Duration) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), start_time, tick_interval)
    }

    fn with_rng(rng: StdRng, start_time: i64, tick_interval: Duration) -> Self {
        Self {
            attitude: AttitudeWalk::default(),
            altitude: AltitudeWalk::default(),
            airspeed: AirspeedWalk::default(),
            rng,
            config: PlaybackConfig::default(),
            simulated_time: start_time,
            tick_millis: tick_interval.as_millis() as f64,
            waypoints: Vec::new(),
            active_waypoint_index: 0,
        }
    }

    #[cfg(test)]
    pub fn active_waypoint_index(&self) -> usize {
        self.active_waypoint_index
    }
}

impl FlightDataProvider for SimulatedFlight {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Simulated
    }

    fn tick(&mut self) {
        if self.config.paused {
            return;
        }

        let speed = self.config.speed;
        self.simulated_time += (self.tick_millis * speed).round() as i64;

        self.attitude.step(&mut self.rng, speed);
        self.altitude.step(&mut self.rng, speed);
        self.airspeed.step(&mut self.rng, speed);
    }

    fn current_snapshot(&self) -> Option<FlightSnapshot> {
        Some(FlightSnapshot {
            timestamp: self.simulated_time,
            attitude: self.attitude.current(),
            altitude: self.altitude.current(),
            air_speed: self.airspeed.current(),
            position: HOME_POSITION,
            progress: None,
            active_waypoint_index: self.active_waypoint_index,
        })
    }

    /// A simulation has no beginning or end
    fn progress(&self) -> Option<PlaybackProgress> {
        None
    }

    fn set_paused(&mut self, paused: bool) {
        self.config.paused = paused;
    }

    fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.config.speed = multiplier;
    }

    fn seek(&mut self, percentage: f64) {
        debug!("Seek to {} ignored by simulated flight", percentage);
    }

    fn reset(&mut self) {
        debug!("Reset ignored by simulated flight");
    }

    fn flight_plan(&self) -> &[NavPoint] {
        &self.waypoints
    }

    fn update_flight_plan(&mut self, waypoints: Vec<NavPoint>) {
        debug!("Simulated flight plan updated with {} waypoints", waypoints.len());
        self.waypoints = waypoints;
        self.active_waypoint_index = 0;
    }
}
