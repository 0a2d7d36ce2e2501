//! This module is responsible for reading the flat input files (sniffer and
//! road tables, raw detection logs, hourly edge files) and writing the
//! hourly edge files produced by the preprocessor.

mod config;
mod edges;
mod logs;
mod network;
mod parser;
mod raw_types;

pub use config::{MapConfig, PreprocessConfig};
pub use edges::{hourly_edge_path, read_day, read_hourly_edges, write_hourly_edges};
pub use logs::{date_from_file_name, discover_log_files, read_detections};
pub use network::{load_road_network, load_sniffers};
pub use parser::{parse_address, parse_line_string, parse_point, parse_timestamp};
pub use raw_types::{RawDetection, RawRoadSegment, RawSniffer};
