use tracing::info;
use wififlow_core::{
    Error,
    preprocess::{PreprocessSummary, run_preprocessor},
};

use crate::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<PreprocessSummary, Error> {
    let preprocess_config = config.preprocess_config();
    info!(
        raw_logs_dir = %preprocess_config.raw_logs_dir.display(),
        data_dir = %preprocess_config.data_dir.display(),
        "Preprocessing raw logs"
    );

    let summary = run_preprocessor(&preprocess_config)?;
    for day in &summary.days {
        info!(
            date = %day.date,
            files = day.log_files,
            detections = day.detections,
            transitions = day.transitions,
            edges = day.edges_per_hour.iter().sum::<usize>(),
            "Day written"
        );
    }
    Ok(summary)
}
