use serde::{Deserialize, Serialize};

/// A navigation point such as an airport or a flight plan waypoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub ident: String,
    /// e.g. small_airport, medium_airport, large_airport
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}
