use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable pointing at an alternative settings file
pub const CONFIG_ENV_VAR: &str = "FLIGHT_REPLAY_CONFIG";

/// Persistent server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
    /// Heartbeat period in milliseconds
    pub tick_interval_ms: u64,
    pub flights_dir: PathBuf,
    pub airports_file: PathBuf,
    /// Default search radius for nearby airports, in nautical miles
    pub nav_radius_nm: f64,
    pub frontend_origin: String,
    /// Snapshots queued per client before new ones are dropped
    pub outbound_buffer: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            tick_interval_ms: 50,
            flights_dir: PathBuf::from("data/flights"),
            airports_file: PathBuf::from("data/airports.csv"),
            nav_radius_nm: 200.0,
            frontend_origin: "http://localhost:5173".to_string(),
            outbound_buffer: 32,
        }
    }
}

impl ServerSettings {
    fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|p| p.join("flight-replay").join("settings.json"))
    }

    /// Load settings from the usual place, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`. A missing or unreadable file gives defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&contents) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Replace values the server cannot run with
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.tick_interval_ms == 0 {
            warn!("tick_interval_ms must be positive, using {}", defaults.tick_interval_ms);
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        if self.outbound_buffer == 0 {
            warn!("outbound_buffer must be positive, using {}", defaults.outbound_buffer);
            self.outbound_buffer = defaults.outbound_buffer;
        }
        if !(self.nav_radius_nm.is_finite() && self.nav_radius_nm > 0.0) {
            warn!("nav_radius_nm must be positive, using {}", defaults.nav_radius_nm);
            self.nav_radius_nm = defaults.nav_radius_nm;
        }
        self
    }
}
