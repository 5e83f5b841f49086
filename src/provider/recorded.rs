use super::{FlightDataProvider, ProviderKind};
use crate::core::{FlightSnapshot, NavPoint, PlaybackProgress};
use crate::playback::PlaybackEngine;
use tracing::debug;

impl FlightDataProvider for PlaybackEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Recorded
    }

    fn tick(&mut self) {
        PlaybackEngine::tick(self);
    }

    fn current_snapshot(&self) -> Option<FlightSnapshot> {
        PlaybackEngine::current_snapshot(self)
    }

    fn progress(&self) -> Option<PlaybackProgress> {
        PlaybackEngine::progress(self)
    }

    fn set_paused(&mut self, paused: bool) {
        PlaybackEngine::set_paused(self, paused);
    }

    fn set_speed_multiplier(&mut self, multiplier: f64) {
        PlaybackEngine::set_speed_multiplier(self, multiplier);
    }

    fn seek(&mut self, percentage: f64) {
        PlaybackEngine::seek(self, percentage);
    }

    fn reset(&mut self) {
        PlaybackEngine::reset(self);
    }

    /// Recorded flights follow their recorded track, not a plan
    fn flight_plan(&self) -> &[NavPoint] {
        &[]
    }

    fn update_flight_plan(&mut self, waypoints: Vec<NavPoint>) {
        debug!("Ignoring {} waypoint flight plan for recorded playback", waypoints.len());
    }
}
