use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use strata_tiles::palette::GlyphDef;
use strata_tiles::{Palette, PaletteError};

/// Contents of `strata.toml`. Every table is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LevelConfig {
    #[serde(default)]
    pub level: LevelSettings,
    #[serde(default)]
    pub glyphs: HashMap<String, GlyphDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelSettings {
    #[serde(default = "default_maps_root")]
    pub maps_root: PathBuf,
    /// Z index below which off-map space is solid.
    #[serde(default)]
    pub ground_level: i32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
}

fn default_maps_root() -> PathBuf {
    PathBuf::from("assets/maps")
}
fn default_gravity() -> f32 {
    crate::level::GRAVITY
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            maps_root: default_maps_root(),
            ground_level: 0,
            gravity: default_gravity(),
        }
    }
}

impl LevelConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(ConfigError::Toml)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Standard glyph table with this config's `[glyphs]` applied.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut p = Palette::standard();
        p.apply_overrides(&self.glyphs).map_err(ConfigError::Palette)?;
        Ok(p)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Toml(toml::de::Error),
    Palette(PaletteError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            ConfigError::Toml(e) => write!(f, "config: {}", e),
            ConfigError::Palette(e) => write!(f, "config: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Toml(e) => Some(e),
            ConfigError::Palette(e) => Some(e),
        }
    }
}
