//! Command-line front end: runs the preprocessing and map building stages.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod map;
mod preprocess;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "wififlow",
    version,
    about = "Travel times and traffic-flow maps from WiFi sniffer logs"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root of the hourly edge files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn raw detection logs into hourly edge files
    Preprocess,
    /// Render one day's hourly edge files as an interactive map
    Map(MapArgs),
    /// Preprocess, then render
    Run(MapArgs),
}

#[derive(Args)]
struct MapArgs {
    /// Day to render (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Output HTML file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Open the map after writing it
    #[arg(long)]
    open: bool,
}

impl MapArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(date) = self.date {
            config.map.date = date;
        }
        if let Some(output) = &self.output {
            config.map.output = Some(output.clone());
        }
        config.map.open |= self.open;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Commands::Preprocess => {
            preprocess::run(&config)?;
        }
        Commands::Map(args) => {
            args.apply(&mut config);
            map::run(&config)?;
        }
        Commands::Run(args) => {
            args.apply(&mut config);
            preprocess::run(&config)?;
            map::run(&config)?;
        }
    }

    Ok(())
}
