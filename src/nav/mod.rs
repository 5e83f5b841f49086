//! Airport database with proximity queries

use crate::core::NavPoint;
use crate::input::load_airports_file;
use std::path::Path;
use tracing::{error, info};

/// Mean Earth radius in nautical miles
const EARTH_RADIUS_NM: f64 = 3440.065;

/// In-memory set of navigation points, loaded once at startup
#[derive(Debug, Default)]
pub struct NavDatabase {
    airports: Vec<NavPoint>,
}

impl NavDatabase {
    pub fn new(airports: Vec<NavPoint>) -> Self {
        Self { airports }
    }

    /// Load airports from disk. A failed load is logged and yields an empty
    /// database so the server can still start.
    pub fn load(path: &Path) -> Self {
        match load_airports_file(path) {
            Ok(airports) => {
                info!("NavData initialized with {} active airports", airports.len());
                Self::new(airports)
            }
            Err(e) => {
                error!("Failed to load navigation data from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// All points within `radius_nm` nautical miles of the given position
    pub fn find_nearby(&self, lat: f64, lon: f64, radius_nm: f64) -> Vec<NavPoint> {
        self.airports
            .iter()
            .filter(|a| distance_nm(lat, lon, a.latitude, a.longitude) <= radius_nm)
            .cloned()
            .collect()
    }
}

/// Great-circle distance between two coordinates (haversine)
pub fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}
