use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{DEFAULT_SPEED_CAP_KMH, model::Bounds};

/// Inputs and outputs of the preprocessing stage
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Directory holding the per-device log directories
    pub raw_logs_dir: PathBuf,
    /// Name prefix of the per-device log directories
    pub log_dir_prefix: String,
    /// Root of the hourly edge files
    pub data_dir: PathBuf,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            raw_logs_dir: PathBuf::from("original"),
            log_dir_prefix: "wifi_logs_".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Inputs and presentation settings of the map building stage
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// `wifi_routers.csv`
    pub sniffers_path: PathBuf,
    /// `road_network.csv`
    pub roads_path: PathBuf,
    /// Root of the hourly edge files
    pub data_dir: PathBuf,
    /// Day whose 24 hourly files are rendered
    pub date: NaiveDate,
    /// Initial view as `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// Road segments outside this box are not rendered
    pub road_bounds: Bounds,
    /// Key of the address JSON blob to display
    pub address_language: String,
    pub speed_cap_kmh: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            sniffers_path: PathBuf::from("data/routers_network/wifi_routers.csv"),
            roads_path: PathBuf::from("data/routers_network/road_network.csv"),
            data_dir: PathBuf::from("data"),
            date: NaiveDate::from_ymd_opt(2022, 12, 1).unwrap_or_default(),
            center: [54.1913, 37.6165],
            zoom: 13,
            road_bounds: Bounds::default(),
            address_language: "rus".to_string(),
            speed_cap_kmh: DEFAULT_SPEED_CAP_KMH,
        }
    }
}
