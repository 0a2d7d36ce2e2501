//! Travel-time analytics over WiFi sniffer detections.
//!
//! The crate covers two batch stages that communicate through the
//! filesystem:
//!
//! - preprocessing: raw per-device detection logs are turned into
//!   transitions between sniffers, filtered for outliers per edge and
//!   aggregated into one edge file per hour of day;
//! - map building: the hourly edge files are combined with the static
//!   sniffer and road tables, styled by average speed and rendered into
//!   an interactive map with a time slider.

pub mod error;
pub mod loading;
pub mod model;
pub mod preprocess;
pub mod render;
pub mod styling;

pub mod prelude;

pub use error::Error;

/// Sniffer identifier (guid as found in the sniffer table and the logs)
pub type RouterId = String;

/// Hour of day, `0..24`
pub type Hour = u32;

pub const HOURS_PER_DAY: Hour = 24;

/// Average speeds above this value are treated as distance/time artifacts
pub const DEFAULT_SPEED_CAP_KMH: f64 = 250.0;

/// Added to the summed seconds before averaging so zero-second edges keep a
/// finite speed
pub const SECONDS_EPSILON: f64 = 0.0001;
