use serde::{Deserialize, Serialize};
use super::sample::{AirSpeed, Altitude, Attitude, Position, Sample};

/// Where a recorded playback currently is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackProgress {
    pub current_index: usize,
    pub total_samples: usize,
    /// Completion fraction in [0, 1], rounded to 4 decimal places
    pub percentage: f64,
    pub start_time: i64,
    pub end_time: i64,
}

/// What a client receives on every heartbeat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSnapshot {
    pub timestamp: i64,
    pub attitude: Attitude,
    pub altitude: Altitude,
    pub air_speed: AirSpeed,
    pub position: Position,
    /// Absent for simulated flights
    pub progress: Option<PlaybackProgress>,
    pub active_waypoint_index: usize,
}

impl FlightSnapshot {
    /// Merge a recorded sample with the playback progress at that sample
    pub fn from_sample(sample: &Sample, progress: PlaybackProgress) -> Self {
        Self {
            timestamp: sample.timestamp,
            attitude: sample.attitude,
            altitude: sample.altitude,
            air_speed: sample.air_speed,
            position: sample.position,
            progress: Some(progress),
            active_waypoint_index: 0,
        }
    }
}
