pub mod csv;
pub mod library;
pub mod nav;

pub use csv::load_flight_file;
pub use library::{DirectoryLibrary, FlightLibrary};
pub use nav::load_airports_file;

use thiserror::Error;

/// Why a source file could not be turned into data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("missing required column {0}")]
    MissingColumn(String),

    #[error("row {row}: invalid {field} value {value:?}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: timestamp earlier than the previous row")]
    NonMonotonic { row: usize },

    #[error("invalid flight name {0:?}")]
    InvalidName(String),
}

/// A flight name is a bare file name inside the flights directory
pub fn is_valid_flight_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

/// Find a column by checking possible names, case-insensitively
fn find_column(headers: &::csv::StringRecord, names: &[&str]) -> Result<usize, LoadError> {
    for (idx, header) in headers.iter().enumerate() {
        let header_lower = header.trim().to_lowercase();
        if names.iter().any(|&name| header_lower == name) {
            return Ok(idx);
        }
    }

    Err(LoadError::MissingColumn(names.join("|")))
}
