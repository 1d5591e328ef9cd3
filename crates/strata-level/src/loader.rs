//! Plain-text map loader.
//!
//! A map named `dusk` lives in `<root>/dusk/` as `dusk0.txt`, `dusk1.txt`, ...
//! Layer 0 is the bottom. Discovery stops at the first missing index. Each
//! line is a row (y) and each character a column (x). A leading byte-order
//! mark is skipped.

use std::fs;
use std::path::PathBuf;

use strata_geom::Vec3;
use strata_tiles::coords::{footprint_center, min_corner};
use strata_tiles::{Glyph, Palette, SpawnKind, Tile};

use crate::error::MapError;
use crate::grid::TileGrid;
use crate::spawn::SpawnSink;
use crate::stitch::stitch;

pub struct MapLoader<'a> {
    root: PathBuf,
    palette: &'a Palette,
}

impl<'a> MapLoader<'a> {
    pub fn new(root: impl Into<PathBuf>, palette: &'a Palette) -> Self {
        Self {
            root: root.into(),
            palette,
        }
    }

    pub fn layer_path(&self, map: &str, index: usize) -> PathBuf {
        self.root.join(map).join(format!("{}{}.txt", map, index))
    }

    /// Paths of the contiguous layer files `0..n` that exist.
    pub fn discover(&self, map: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        loop {
            let path = self.layer_path(map, paths.len());
            if !path.is_file() {
                break;
            }
            paths.push(path);
        }
        paths
    }

    /// Reads, parses, and stitches every layer of `map`. Spawn requests
    /// reach `spawns` only if the whole map loads.
    pub fn load(&self, map: &str, spawns: &mut dyn SpawnSink) -> Result<TileGrid, MapError> {
        let paths = self.discover(map);
        if paths.is_empty() {
            return Err(MapError::MissingLayer {
                map: map.to_string(),
                path: self.layer_path(map, 0),
            });
        }
        log::info!(target: "map", "map {:?}: found {} layer file(s) under {}", map, paths.len(), self.root.display());
        let mut texts = Vec::with_capacity(paths.len());
        for path in &paths {
            let text = fs::read_to_string(path).map_err(|source| MapError::Io {
                path: path.clone(),
                source,
            })?;
            log::debug!(target: "map", "read {}", path.display());
            texts.push(text);
        }
        let layers: Vec<&str> = texts.iter().map(String::as_str).collect();
        parse_layers(&layers, self.palette, spawns)
    }
}

struct LayerRows<'t> {
    width: usize,
    rows: Vec<&'t str>,
}

fn split_layer(layer: usize, text: &str) -> Result<LayerRows<'_>, MapError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows: Vec<&str> = text.lines().collect();
    let width = match rows.first() {
        Some(first) => first.chars().count(),
        None => 0,
    };
    if width == 0 {
        return Err(MapError::EmptyLayer { layer });
    }
    for (i, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(MapError::RaggedLine {
                layer,
                line: i + 1,
                expected: width,
                found,
            });
        }
    }
    Ok(LayerRows { width, rows })
}

/// Builds a stitched grid from layer texts, bottom layer first.
pub fn parse_layers(
    layers: &[&str],
    palette: &Palette,
    spawns: &mut dyn SpawnSink,
) -> Result<TileGrid, MapError> {
    if layers.is_empty() {
        return Err(MapError::NoLayers);
    }
    let mut grid: Option<TileGrid> = None;
    let mut pending: Vec<(SpawnKind, Vec3)> = Vec::new();

    for (z, text) in layers.iter().enumerate() {
        let layer = split_layer(z, text)?;
        let found = (layer.width, layer.rows.len());
        // Layer 0 fixes width and height for the whole map.
        let grid = grid.get_or_insert_with(|| TileGrid::new(found.0, found.1, layers.len()));
        let expected = (grid.width(), grid.height());
        if found != expected {
            return Err(MapError::LayerShape {
                layer: z,
                expected,
                found,
            });
        }
        for (y, row) in layer.rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let (xi, yi, zi) = (x as i32, y as i32, z as i32);
                let tile = match palette.get(glyph) {
                    Some(Glyph::Tile(spec)) => spec.build(min_corner(xi, yi, zi)),
                    Some(Glyph::Spawn { kind, lift }) => {
                        pending.push((kind.clone(), footprint_center(xi, yi, zi, *lift)));
                        Tile::empty(min_corner(xi, yi, zi))
                    }
                    None => return Err(MapError::UnknownGlyph { glyph, x, y, z }),
                };
                grid.set(x, y, z, tile);
            }
        }
    }

    let Some(mut grid) = grid else {
        return Err(MapError::NoLayers);
    };
    let stitched = stitch(&mut grid);
    log::info!(
        target: "map",
        "loaded {}x{}x{} grid, {} renderable tile(s), {} spawn(s)",
        grid.width(),
        grid.height(),
        grid.depth(),
        stitched,
        pending.len()
    );
    for (kind, at) in pending {
        log::debug!(target: "map", "spawn {} at ({:.1}, {:.1}, {:.1})", kind, at.x, at.y, at.z);
        spawns.spawn(kind, at);
    }
    Ok(grid)
}
