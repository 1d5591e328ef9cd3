//! Level grid storage, map loading, seam stitching, and world queries.
#![forbid(unsafe_code)]

pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod level;
pub mod loader;
pub mod spawn;
pub mod stitch;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, LevelConfig, LevelSettings};
pub use draw::{CameraView, DrawStats, TileRenderer};
pub use error::MapError;
pub use grid::TileGrid;
pub use level::Level;
pub use loader::{MapLoader, parse_layers};
pub use spawn::{Spawn, SpawnLog, SpawnSink};
pub use strata_tiles::SpawnKind;
