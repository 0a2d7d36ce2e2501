//! `wififlow.toml` configuration
//!
//! Every field is optional; missing ones fall back to the defaults of the
//! core configuration structs.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use wififlow_core::{
    loading::{MapConfig, PreprocessConfig},
    model::Bounds,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the hourly edge files, shared by both stages
    pub data_dir: PathBuf,
    pub preprocess: PreprocessSection,
    pub map: MapSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreprocessSection {
    pub raw_logs_dir: PathBuf,
    pub log_dir_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapSection {
    /// Directory with `wifi_routers.csv` and `road_network.csv`
    pub network_dir: PathBuf,
    pub date: NaiveDate,
    pub center: [f64; 2],
    pub zoom: u8,
    pub bounds: Bounds,
    pub address_language: String,
    pub speed_cap_kmh: f64,
    /// Where the HTML page goes; temp dir when unset
    pub output: Option<PathBuf>,
    /// Hand the page to the platform opener after writing it
    pub open: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PreprocessConfig::default().data_dir,
            preprocess: PreprocessSection::default(),
            map: MapSection::default(),
        }
    }
}

impl Default for PreprocessSection {
    fn default() -> Self {
        let core = PreprocessConfig::default();
        Self {
            raw_logs_dir: core.raw_logs_dir,
            log_dir_prefix: core.log_dir_prefix,
        }
    }
}

impl Default for MapSection {
    fn default() -> Self {
        let core = MapConfig::default();
        Self {
            network_dir: PathBuf::from("data/routers_network"),
            date: core.date,
            center: core.center,
            zoom: core.zoom,
            bounds: core.road_bounds,
            address_language: core.address_language,
            speed_cap_kmh: core.speed_cap_kmh,
            output: None,
            open: false,
        }
    }
}

impl AppConfig {
    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {e}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {e}", path.display()))
    }

    pub fn preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig {
            raw_logs_dir: self.preprocess.raw_logs_dir.clone(),
            log_dir_prefix: self.preprocess.log_dir_prefix.clone(),
            data_dir: self.data_dir.clone(),
        }
    }

    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            sniffers_path: self.map.network_dir.join("wifi_routers.csv"),
            roads_path: self.map.network_dir.join("road_network.csv"),
            data_dir: self.data_dir.clone(),
            date: self.map.date,
            center: self.map.center,
            zoom: self.map.zoom,
            road_bounds: self.map.bounds,
            address_language: self.map.address_language.clone(),
            speed_cap_kmh: self.map.speed_cap_kmh,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.map.output.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(format!("wififlow_map_{}.html", self.map.date))
        })
    }
}
