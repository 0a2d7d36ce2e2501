use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid timestamp '{value}' in '{}' (row {row}): {source}", path.display())]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid geometry '{value}': {reason}")]
    InvalidGeometry { value: String, reason: String },
    #[error("Invalid address for sniffer {guid}: {reason}")]
    InvalidAddress { guid: String, reason: String },
    #[error("Cannot derive a date from log file name '{name}'")]
    InvalidFileName { name: String },
    #[error("Router {guid} is not present in the sniffer table")]
    UnknownRouter { guid: String },
    #[error("Hourly edge file not found: {}", path.display())]
    MissingHourFile { path: PathBuf },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
