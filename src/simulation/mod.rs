//! Bounded random walks that stand in for live aircraft sensors.
//!
//! Each walk moves by a small random step per tick. The step is scaled by
//! the playback speed so a faster simulation also changes faster.

use crate::core::{AirSpeed, Altitude, Attitude};
use rand::Rng;

/// Pitch, roll and yaw drifting within a gentle flight envelope
#[derive(Debug, Clone, Default)]
pub struct AttitudeWalk {
    current: Attitude,
}

impl AttitudeWalk {
    const MAX_PITCH_CHANGE: f64 = 0.5;
    const MAX_ROLL_CHANGE: f64 = 1.0;
    const MAX_YAW_CHANGE: f64 = 0.2;

    pub fn step<R: Rng>(&mut self, rng: &mut R, scale: f64) {
        let a = &mut self.current;
        a.pitch += rng.gen_range(-1.0..=1.0) * Self::MAX_PITCH_CHANGE * scale;
        a.roll += rng.gen_range(-1.0..=1.0) * Self::MAX_ROLL_CHANGE * scale;
        a.yaw += rng.gen_range(-1.0..=1.0) * Self::MAX_YAW_CHANGE * scale;

        a.pitch = a.pitch.clamp(-10.0, 10.0);
        a.roll = a.roll.clamp(-30.0, 30.0);
        a.yaw = a.yaw.clamp(0.0, 360.0);
    }

    pub fn current(&self) -> Attitude {
        self.current
    }
}

/// Altitude in feet, starting at cruise
#[derive(Debug, Clone)]
pub struct AltitudeWalk {
    current: Altitude,
}

impl Default for AltitudeWalk {
    fn default() -> Self {
        Self {
            current: Altitude::new(25_500.0),
        }
    }
}

impl AltitudeWalk {
    const MAX_CHANGE_FT: f64 = 10.0;
    const CEILING_FT: f64 = 40_000.0;

    pub fn step<R: Rng>(&mut self, rng: &mut R, scale: f64) {
        let change = rng.gen_range(-1.0..=1.0) * Self::MAX_CHANGE_FT * scale;
        self.current.altitude = (self.current.altitude + change).clamp(0.0, Self::CEILING_FT);
    }

    pub fn current(&self) -> Altitude {
        self.current
    }
}

/// Airspeed in knots, starting just above the minimum
#[derive(Debug, Clone)]
pub struct AirspeedWalk {
    current: f64,
}

impl Default for AirspeedWalk {
    fn default() -> Self {
        Self { current: 60.0 }
    }
}

impl AirspeedWalk {
    /// Stall speed
    const MIN_KT: f64 = 40.0;
    const MAX_KT: f64 = 180.0;
    const MAX_CHANGE_KT: f64 = 2.5;

    pub fn step<R: Rng>(&mut self, rng: &mut R, scale: f64) {
        let change = rng.gen_range(-1.0..=1.0) * Self::MAX_CHANGE_KT * scale;
        self.current = (self.current + change).clamp(Self::MIN_KT, Self::MAX_KT);
    }

    pub fn current(&self) -> AirSpeed {
        AirSpeed { speed: self.current }
    }
}
