//! Preprocessing stage: raw detections to hourly edge aggregates
//!
//! Two explicit passes over a day's detections: per device, consecutive
//! sightings at different sniffers become transitions; per hour and edge,
//! transitions outside the interquartile fences are dropped and the rest
//! are summed.

mod hourly;
mod outliers;
mod pipeline;
mod transitions;

pub use hourly::{bucket_by_hour, hourly_edges};
pub use outliers::{IqrBounds, aggregate_edges, filter_outliers, quantile};
pub use pipeline::{DaySummary, PreprocessSummary, process_day, run_preprocessor};
pub use transitions::extract_transitions;
