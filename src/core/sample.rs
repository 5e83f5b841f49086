use serde::{Deserialize, Serialize};

/// Standard barometric reference pressure in inHg
pub const STANDARD_PRESSURE_INHG: f64 = 29.92;

/// Aircraft attitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Altitude in feet with the barometric reference it was read against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Altitude {
    pub altitude: f64,
    /// Reference (Kollsman) pressure in inHg
    pub reference_pressure: f64,
}

impl Altitude {
    pub fn new(altitude: f64) -> Self {
        Self {
            altitude,
            reference_pressure: STANDARD_PRESSURE_INHG,
        }
    }
}

/// Indicated airspeed in knots
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AirSpeed {
    pub speed: f64,
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// One recorded telemetry row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Recorded time in milliseconds. Only deltas between rows are meaningful.
    pub timestamp: i64,
    pub attitude: Attitude,
    pub altitude: Altitude,
    pub air_speed: AirSpeed,
    pub position: Position,
}
