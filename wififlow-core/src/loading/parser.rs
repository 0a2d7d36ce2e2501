use std::fs::File;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use geo::{LineString, Point};
use wkt::TryFromWkt;

use crate::Error;

/// Timestamp layout of the raw logs, e.g. `2022-12-01 08:15:42.123456 +0300`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Opens a `;`-delimited CSV file with a header row
pub(crate) fn csv_reader(path: &Path) -> Result<csv::Reader<File>, Error> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(file))
}

/// Deserializes every row of a `;`-delimited CSV file.
///
/// The first malformed row aborts the read.
pub(crate) fn deserialize_csv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    csv_reader(path)?
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| Error::csv(path, e))
}

/// Parses a raw log timestamp, keeping its UTC offset
///
/// # Errors
///
/// Returns the chrono parse error for any other layout
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
}

/// Parses a WKT `POINT (<lon> <lat>)`
pub fn parse_point(value: &str) -> Result<Point<f64>, Error> {
    Point::try_from_wkt_str(value.trim()).map_err(|e| Error::InvalidGeometry {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a three-point WKT `LINESTRING (<lon> <lat>, <lon> <lat>, <lon> <lat>)`
pub fn parse_line_string(value: &str) -> Result<LineString<f64>, Error> {
    let line = LineString::try_from_wkt_str(value.trim()).map_err(|e| Error::InvalidGeometry {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if line.0.len() != 3 {
        return Err(Error::InvalidGeometry {
            value: value.to_string(),
            reason: format!("a road segment has 3 points, got {}", line.0.len()),
        });
    }
    Ok(line)
}

/// Extracts the address for `language` from an address JSON blob
pub fn parse_address(guid: &str, json: &str, language: &str) -> Result<String, Error> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::InvalidAddress {
            guid: guid.to_string(),
            reason: e.to_string(),
        })?;
    value
        .get(language)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidAddress {
            guid: guid.to_string(),
            reason: format!("no '{language}' entry"),
        })
}
