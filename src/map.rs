use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};
use wififlow_core::render::build_traffic_map;

use crate::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let map_config = config.map_config();
    info!(date = %map_config.date, "Building traffic map");

    let document = build_traffic_map(&map_config)?;
    let output = config.output_path();
    document.write_html(&output)?;
    info!(path = %output.display(), "Map written");

    if config.map.open {
        open_in_browser(&output);
    }
    Ok(output)
}

fn open_in_browser(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    match command.arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(%status, "Map viewer exited with an error"),
        Err(e) => warn!(error = %e, "Could not launch a map viewer"),
    }
}
