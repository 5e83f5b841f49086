pub mod recorded;
pub mod simulated;

pub use simulated::SimulatedFlight;

use crate::core::{FlightSnapshot, NavPoint, PlaybackProgress};
use serde::{Deserialize, Serialize};

/// Which kind of flight a session is watching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Simulated,
    Recorded,
}

/// A per-session source of flight snapshots.
///
/// Implementations:
/// - [`crate::playback::PlaybackEngine`] replays a recorded flight
/// - [`SimulatedFlight`] generates random-walk telemetry
///
/// Capabilities a variant does not have are implemented as explicit no-ops
/// or `None`, never left to a default.
pub trait FlightDataProvider: Send {
    fn kind(&self) -> ProviderKind;

    /// Advance by one heartbeat
    fn tick(&mut self);

    /// Current telemetry, or `None` when there is nothing to show
    fn current_snapshot(&self) -> Option<FlightSnapshot>;

    fn progress(&self) -> Option<PlaybackProgress>;

    fn set_paused(&mut self, paused: bool);

    /// Caller guarantees `multiplier > 0`
    fn set_speed_multiplier(&mut self, multiplier: f64);

    /// Jump to a fraction of the flight in [0, 1]
    fn seek(&mut self, percentage: f64);

    fn reset(&mut self);

    fn flight_plan(&self) -> &[NavPoint];

    fn update_flight_plan(&mut self, waypoints: Vec<NavPoint>);
}
