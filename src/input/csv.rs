use super::{find_column, LoadError};
use crate::core::{AirSpeed, Altitude, Attitude, Position, Sample};
use crate::playback::SampleSeries;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Column indices of a recorded flight file
struct FlightColumns {
    timestamp: usize,
    altitude: usize,
    speed: usize,
    direction: usize,
    position: usize,
}

/// Load a recorded flight from a file on disk
pub fn load_flight_file(path: &Path) -> Result<SampleSeries, LoadError> {
    let file = File::open(path)?;
    let samples = load_flight_csv(file)?;
    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(SampleSeries::new(samples))
}

/// Load recorded flight samples from CSV.
///
/// Expected columns (matched by header name):
/// - Timestamp: seconds, converted to milliseconds
/// - Altitude: feet
/// - Speed: knots
/// - Direction: heading in degrees, stored as yaw
/// - Position: "lat,lon" in decimal degrees
///
/// Any bad row fails the whole load.
pub fn load_flight_csv<R: Read>(reader: R) -> Result<Vec<Sample>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = detect_columns(rdr.headers()?)?;
    let mut samples: Vec<Sample> = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let row = i + 2;

        let seconds = parse_number(&record, columns.timestamp, row, "Timestamp")?;
        let timestamp = (seconds * 1000.0).round() as i64;

        if samples.last().is_some_and(|prev| timestamp < prev.timestamp) {
            return Err(LoadError::NonMonotonic { row });
        }

        let heading = parse_number(&record, columns.direction, row, "Direction")?;

        samples.push(Sample {
            timestamp,
            // Recorded flights carry heading only
            attitude: Attitude {
                pitch: 0.0,
                roll: 0.0,
                yaw: heading,
            },
            altitude: Altitude::new(parse_number(&record, columns.altitude, row, "Altitude")?),
            air_speed: AirSpeed {
                speed: parse_number(&record, columns.speed, row, "Speed")?,
            },
            position: parse_position(record.get(columns.position).unwrap_or(""), row)?,
        });
    }

    Ok(samples)
}

fn detect_columns(headers: &csv::StringRecord) -> Result<FlightColumns, LoadError> {
    Ok(FlightColumns {
        timestamp: find_column(headers, &["timestamp"])?,
        altitude: find_column(headers, &["altitude"])?,
        speed: find_column(headers, &["speed"])?,
        direction: find_column(headers, &["direction"])?,
        position: find_column(headers, &["position"])?,
    })
}

fn parse_number(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    field: &'static str,
) -> Result<f64, LoadError> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidField {
            row,
            field,
            value: raw.to_string(),
        })
}

/// Parse a combined "lat,lon" field
fn parse_position(raw: &str, row: usize) -> Result<Position, LoadError> {
    let invalid = || LoadError::InvalidField {
        row,
        field: "Position",
        value: raw.to_string(),
    };

    let cleaned = raw.replace('"', "");
    let (lat, lon) = cleaned.split_once(',').ok_or_else(invalid)?;

    Ok(Position {
        latitude: lat.trim().parse().map_err(|_| invalid())?,
        longitude: lon.trim().parse().map_err(|_| invalid())?,
    })
}
