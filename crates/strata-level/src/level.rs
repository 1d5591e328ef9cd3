//! Read-only world queries over a loaded tile grid.

use strata_geom::{Vec2, Vec3};
use strata_tiles::coords::{DEPTH, FOOT, grid_cell};
use strata_tiles::{Palette, SeamStyle, Tile, TileCollision};

use crate::config::LevelConfig;
use crate::error::MapError;
use crate::grid::TileGrid;
use crate::loader::{MapLoader, parse_layers};
use crate::spawn::SpawnSink;
use crate::stitch::stitch;

pub const GRAVITY: f32 = -5.0;

/// A loaded, stitched level. Immutable after construction; every query
/// takes `&self`.
#[derive(Clone, Debug)]
pub struct Level {
    name: String,
    grid: TileGrid,
    ground_level: i32,
    gravity: f32,
}

impl Level {
    /// Loads `<maps_root>/<name>/<name><i>.txt` using the config's settings.
    pub fn load(
        name: &str,
        config: &LevelConfig,
        palette: &Palette,
        spawns: &mut dyn SpawnSink,
    ) -> Result<Level, MapError> {
        let grid = MapLoader::new(config.level.maps_root.clone(), palette).load(name, spawns)?;
        Ok(Level {
            name: name.to_string(),
            grid,
            ground_level: config.level.ground_level,
            gravity: config.level.gravity,
        })
    }

    /// Builds a level from in-memory layer texts, bottom layer first.
    pub fn from_layers(
        name: &str,
        layers: &[&str],
        palette: &Palette,
        spawns: &mut dyn SpawnSink,
    ) -> Result<Level, MapError> {
        let grid = parse_layers(layers, palette, spawns)?;
        Ok(Level {
            name: name.to_string(),
            grid,
            ground_level: 0,
            gravity: GRAVITY,
        })
    }

    /// Wraps a hand-built grid, stitching it first.
    pub fn from_grid(name: &str, mut grid: TileGrid, ground_level: i32) -> Level {
        stitch(&mut grid);
        Level {
            name: name.to_string(),
            grid,
            ground_level,
            gravity: GRAVITY,
        }
    }

    pub fn with_ground_level(mut self, ground_level: i32) -> Self {
        self.ground_level = ground_level;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the level, in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the level, in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Depth of the level, in layers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.grid.depth()
    }

    #[inline]
    pub fn ground_level(&self) -> i32 {
        self.ground_level
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Horizontal center of the map in world units.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.width() as f32 * FOOT / 2.0,
            self.height() as f32 * FOOT / 2.0,
        )
    }

    /// World Z of the top of the highest layer.
    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.depth() as f32 * DEPTH
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn tile(&self, x: i32, y: i32, z: i32) -> Option<&Tile> {
        self.grid.get(x, y, z)
    }

    /// Collision with the out-of-bounds policy applied: solid bedrock below
    /// layer 0, open sky above the top layer, and beside the map an endless
    /// flat ground that is solid below `ground_level`.
    pub fn collision(&self, x: i32, y: i32, z: i32) -> TileCollision {
        if z < 0 {
            return TileCollision::Solid;
        }
        if z >= self.depth() as i32 {
            return TileCollision::Empty;
        }
        match self.grid.get(x, y, z) {
            Some(t) => t.collision(),
            None if z < self.ground_level => TileCollision::Solid,
            None => TileCollision::Empty,
        }
    }

    #[inline]
    pub fn collision_at(&self, pos: Vec3) -> TileCollision {
        let (x, y, z) = grid_cell(pos);
        self.collision(x, y, z)
    }

    /// Seam style; `NONE` anywhere outside the grid.
    #[inline]
    pub fn style(&self, x: i32, y: i32, z: i32) -> SeamStyle {
        self.grid.style(x, y, z)
    }

    #[inline]
    pub fn style_at(&self, pos: Vec3) -> SeamStyle {
        let (x, y, z) = grid_cell(pos);
        self.style(x, y, z)
    }

    /// Walkable surface height at `pos`, or `None` when the cell is neither
    /// a landing nor a slope. A landing directly under a slope takes the
    /// slope's height so the ramp meets the platform.
    pub fn try_slope_height(&self, pos: Vec3) -> Option<f32> {
        let (x, y, z) = grid_cell(pos);
        match self.collision(x, y, z) {
            TileCollision::Landing => {
                if self.collision(x, y, z + 1) == TileCollision::Slope {
                    self.tile(x, y, z + 1)?.height_at(pos)
                } else {
                    Some((z + 1) as f32 * DEPTH)
                }
            }
            TileCollision::Slope => self.tile(x, y, z)?.height_at(pos),
            _ => None,
        }
    }

    /// Like [`Level::try_slope_height`], for callers that already checked
    /// the collision kind.
    ///
    /// # Panics
    /// If the cell at `pos` is not a landing or slope.
    pub fn slope_height(&self, pos: Vec3) -> f32 {
        match self.try_slope_height(pos) {
            Some(h) => h,
            None => {
                let (x, y, z) = grid_cell(pos);
                panic!(
                    "slope height queried at ({}, {}, {}) which is {:?}, not a landing or slope",
                    x,
                    y,
                    z,
                    self.collision(x, y, z)
                )
            }
        }
    }

    /// Marches `origin` by `step` up to the ceiling and returns the last
    /// resting position found: one step past a solid or landing cell, or
    /// lifted onto the ramp surface of a slope cell. Returns `origin` when
    /// nothing along the path can be rested on. `step` needs a positive Z.
    pub fn cast_position(&self, origin: Vec3, step: Vec3) -> Vec3 {
        if step.z <= 0.0 {
            log::warn!("cast step {:?} never reaches the ceiling; returning origin", step);
            return origin;
        }
        let ceiling = self.ceiling();
        let mut p = origin;
        let mut result = origin;
        while p.z < ceiling {
            match self.collision_at(p) {
                c if c.is_resting() => result = p + step,
                TileCollision::Slope => {
                    let (x, y, z) = grid_cell(p);
                    if let Some(h) = self.tile(x, y, z).and_then(|t| t.height_at(p)) {
                        let h = h.rem_euclid(DEPTH);
                        let frac = h / DEPTH;
                        result = p + Vec3::new(step.x * frac, step.y * frac, h);
                    }
                }
                _ => {}
            }
            let next = p + step;
            if next.z <= p.z {
                // step too small to move p at this magnitude
                break;
            }
            p = next;
        }
        result
    }
}
