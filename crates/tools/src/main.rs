use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use compute::{BoundsConfig, merge_intervals};
use foundation::bounds::LonInterval;
use tools::{MapDescription, parse_config, parse_interval};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Viewport bounds for map layers")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the data bounds of a JSON layer description
    Bounds {
        /// Layer description file
        layers: PathBuf,

        /// Bounds configuration file (epsilon, min_latitude, max_latitude)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Merge longitude intervals given as west,east
    Merge {
        #[arg(required = true, allow_hyphen_values = true)]
        intervals: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    match Args::parse().command {
        Command::Bounds { layers, config } => cmd_bounds(layers, config),
        Command::Merge { intervals } => cmd_merge(&intervals),
    }
}

fn cmd_bounds(layers: PathBuf, config: Option<PathBuf>) -> Result<(), String> {
    let config = match config {
        Some(path) => {
            let raw = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
            parse_config(&raw)?
        }
        None => BoundsConfig::default(),
    };

    let raw = fs::read_to_string(&layers).map_err(|e| format!("read {layers:?}: {e}"))?;
    let desc = MapDescription::from_json(&raw)?;
    let map = desc.build(config).map_err(|e| e.to_string())?;
    info!(layers = map.len(), "computed viewport bounds");

    let json = serde_json::to_string_pretty(&map.state()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn cmd_merge(raw: &[String]) -> Result<(), String> {
    let intervals = raw
        .iter()
        .map(|s| parse_interval(s))
        .collect::<Result<Vec<LonInterval>, String>>()?;
    let merged: (f64, f64) = merge_intervals(&intervals).into();
    let json = serde_json::to_string(&merged).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
