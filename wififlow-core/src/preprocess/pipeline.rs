use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{info, warn};

use super::hourly::hourly_edges;
use super::transitions::extract_transitions;
use crate::{
    Error,
    loading::{
        PreprocessConfig, date_from_file_name, discover_log_files, read_detections,
        write_hourly_edges,
    },
};

/// What one processed day produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub log_files: usize,
    pub detections: usize,
    pub transitions: usize,
    /// Edge rows written per hour
    pub edges_per_hour: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessSummary {
    pub days: Vec<DaySummary>,
}

/// Processes every raw log file into hourly edge files.
///
/// Files are grouped by the date in their name; all files of one date are
/// merged before transitions are extracted, so each day is written once.
///
/// # Errors
///
/// Returns an error for an invalid configuration or the first file that
/// cannot be read or written
pub fn run_preprocessor(config: &PreprocessConfig) -> Result<PreprocessSummary, Error> {
    validate_config(config)?;

    let files = discover_log_files(&config.raw_logs_dir, &config.log_dir_prefix)?;
    if files.is_empty() {
        warn!(
            "No log files found under {} with prefix '{}'",
            config.raw_logs_dir.display(),
            config.log_dir_prefix
        );
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<PathBuf>> = BTreeMap::new();
    for file in files {
        by_date.entry(date_from_file_name(&file)?).or_default().push(file);
    }

    let days = by_date
        .into_iter()
        .map(|(date, files)| process_day(&config.data_dir, date, &files))
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(PreprocessSummary { days })
}

/// Processes all log files of one day into its 24 hourly edge files
///
/// # Errors
///
/// Returns an error if a log file cannot be parsed or an output file
/// cannot be written
pub fn process_day(data_dir: &Path, date: NaiveDate, files: &[PathBuf]) -> Result<DaySummary, Error> {
    info!("Processing {date}: {} log file(s)", files.len());

    let mut events = Vec::new();
    for file in files {
        events.extend(read_detections(file)?);
    }
    let detections = events.len();

    let transitions = extract_transitions(events);
    let transition_count = transitions.len();
    info!("{date}: {detections} detections, {transition_count} transitions");

    let mut edges_per_hour = Vec::with_capacity(crate::HOURS_PER_DAY as usize);
    for hourly in hourly_edges(date, transitions) {
        let path = write_hourly_edges(data_dir, &hourly)?;
        info!(
            "{} - done ({} edges -> {})",
            hourly.slot.hour,
            hourly.edges.len(),
            path.display()
        );
        edges_per_hour.push(hourly.edges.len());
    }

    Ok(DaySummary {
        date,
        log_files: files.len(),
        detections,
        transitions: transition_count,
        edges_per_hour,
    })
}

fn validate_config(config: &PreprocessConfig) -> Result<(), Error> {
    if !config.raw_logs_dir.is_dir() {
        return Err(Error::io(
            &config.raw_logs_dir,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "raw log directory not found",
            ),
        ));
    }
    Ok(())
}
