pub mod nav_point;
pub mod sample;
pub mod snapshot;

pub use nav_point::NavPoint;
pub use sample::{AirSpeed, Altitude, Attitude, Position, Sample};
pub use snapshot::{FlightSnapshot, PlaybackProgress};
