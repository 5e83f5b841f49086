use super::{is_valid_flight_name, load_flight_file, LoadError};
use crate::playback::SampleSeries;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Where recorded flights come from
#[async_trait]
pub trait FlightLibrary: Send + Sync {
    /// Names of the available flights, sorted
    async fn list_flights(&self) -> Result<Vec<String>, LoadError>;

    /// Load one flight by name
    async fn load_flight(&self, name: &str) -> Result<SampleSeries, LoadError>;
}

/// Flights stored as CSV files in one directory
pub struct DirectoryLibrary {
    root: PathBuf,
}

impl DirectoryLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FlightLibrary for DirectoryLibrary {
    async fn list_flights(&self) -> Result<Vec<String>, LoadError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if !is_csv {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    async fn load_flight(&self, name: &str) -> Result<SampleSeries, LoadError> {
        if !is_valid_flight_name(name) {
            return Err(LoadError::InvalidName(name.to_string()));
        }

        let path = self.root.join(name);
        debug!("Loading flight {}", path.display());

        // CSV parsing is blocking; keep it off the runtime threads
        tokio::task::spawn_blocking(move || load_flight_file(&path))
            .await
            .map_err(|e| LoadError::Io(std::io::Error::other(e)))?
    }
}

/// Flights held in memory, for testing without files
#[cfg(test)]
#[derive(Default)]
pub struct MemoryLibrary {
    flights: std::collections::HashMap<String, SampleSeries>,
    /// When set, every load waits for a permit first
    gate: Option<std::sync::Arc<tokio::sync::Notify>>,
}

#[cfg(test)]
impl MemoryLibrary {
    pub fn with_flight(mut self, name: &str, series: SampleSeries) -> Self {
        self.flights.insert(name.to_string(), series);
        self
    }

    /// Hold every load until `gate` is notified
    pub fn gated(mut self, gate: std::sync::Arc<tokio::sync::Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[cfg(test)]
#[async_trait]
impl FlightLibrary for MemoryLibrary {
    async fn list_flights(&self) -> Result<Vec<String>, LoadError> {
        let mut names: Vec<String> = self.flights.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn load_flight(&self, name: &str) -> Result<SampleSeries, LoadError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.flights.get(name).cloned().ok_or_else(|| {
            LoadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no flight named {}", name),
            ))
        })
    }
}
