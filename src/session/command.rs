use crate::core::NavPoint;
use crate::provider::ProviderKind;
use serde::{Deserialize, Serialize};

/// Messages a client sends over its socket, tagged by `action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientCommand {
    SwitchProvider(SwitchProviderRequest),
    Pause { paused: bool },
    Speed { speed: f64 },
    Seek { percentage: f64 },
    Reset,
    FlightPlan { waypoints: Vec<NavPoint> },
}

/// Replace the session's provider, optionally carrying the client's current
/// pause and speed so the new provider starts in the same state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchProviderRequest {
    #[serde(rename = "type")]
    pub kind: ProviderKind,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub paused: Option<bool>,
    #[serde(default)]
    pub speed: Option<f64>,
}

#[cfg(test)]
impl SwitchProviderRequest {
    pub fn simulated() -> Self {
        Self {
            kind: ProviderKind::Simulated,
            file_name: None,
            paused: None,
            speed: None,
        }
    }

    pub fn recorded(file_name: &str) -> Self {
        Self {
            kind: ProviderKind::Recorded,
            file_name: Some(file_name.to_string()),
            paused: None,
            speed: None,
        }
    }
}
