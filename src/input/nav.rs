use super::{find_column, LoadError};
use crate::core::NavPoint;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Load active airports from a file on disk
pub fn load_airports_file(path: &Path) -> Result<Vec<NavPoint>, LoadError> {
    load_airports(File::open(path)?)
}

/// Load active airports from an airport database CSV.
///
/// Uses the `ident`, `type`, `latitude_deg` and `longitude_deg` columns and
/// keeps every type containing "airport" (closed ones are typed "closed").
/// Unlike flight files, a bad row is skipped with a warning instead of
/// failing the load.
pub fn load_airports<R: Read>(reader: R) -> Result<Vec<NavPoint>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?;
    let ident_idx = find_column(headers, &["ident"])?;
    let type_idx = find_column(headers, &["type"])?;
    let lat_idx = find_column(headers, &["latitude_deg"])?;
    let lon_idx = find_column(headers, &["longitude_deg"])?;

    let mut airports = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable airport row {}: {}", row, e);
                skipped += 1;
                continue;
            }
        };

        let kind = record.get(type_idx).unwrap_or("");
        if !kind.contains("airport") {
            continue;
        }

        let coords = record
            .get(lat_idx)
            .and_then(|s| s.parse::<f64>().ok())
            .zip(record.get(lon_idx).and_then(|s| s.parse::<f64>().ok()));
        let ident = record.get(ident_idx).filter(|s| !s.is_empty());

        match (ident, coords) {
            (Some(ident), Some((latitude, longitude))) => airports.push(NavPoint {
                ident: ident.to_string(),
                kind: kind.to_string(),
                latitude,
                longitude,
            }),
            _ => {
                warn!("Skipping malformed airport row {}", row);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed airport rows", skipped);
    }

    Ok(airports)
}
