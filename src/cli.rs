use std::path::PathBuf;

use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

pub const DEFAULT_CONFIG: &str = "strata.toml";

#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Load, inspect and query strata tile maps")]
pub struct Args {
    /// Config file; `strata.toml` in the working directory is used when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding one folder per map (overrides `level.maps_root`)
    #[arg(long, global = true)]
    pub maps: Option<PathBuf>,

    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    /// Also write the log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print dimensions, tile counts and spawns
    Info { map: String },
    /// Collision, seam style and surface height at a world position
    Probe {
        map: String,
        #[arg(allow_hyphen_values = true)]
        x: f32,
        #[arg(allow_hyphen_values = true)]
        y: f32,
        #[arg(allow_hyphen_values = true)]
        z: f32,
    },
    /// March from a position by a fixed step and print where it rests
    Cast {
        map: String,
        #[arg(allow_hyphen_values = true)]
        x: f32,
        #[arg(allow_hyphen_values = true)]
        y: f32,
        #[arg(allow_hyphen_values = true)]
        z: f32,
        #[arg(allow_hyphen_values = true)]
        dx: f32,
        #[arg(allow_hyphen_values = true)]
        dy: f32,
        #[arg(default_value_t = 1.0)]
        dz: f32,
    },
    /// ASCII view of one layer's stitched frames
    Dump { map: String, layer: usize },
    /// Reload the map whenever one of its layer files changes
    Watch { map: String },
}
