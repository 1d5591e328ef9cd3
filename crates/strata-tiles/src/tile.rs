use strata_geom::{Point, Vec3};

use crate::coords::{DEPTH, FOOT};
use crate::types::{Neighbors, SeamStyle, TileCollision, Tint};
use crate::variant::{Sheet, VisualVariant};

/// Planar ramp over one footprint. `gradient` points from the low edge to the
/// high edge; each component is in {-1, 0, 1} and it is never (0, 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ramp {
    gradient: Point,
}

impl Ramp {
    pub fn new(gradient: Point) -> Option<Ramp> {
        if gradient.is_unit_step() && gradient != Point::ZERO {
            Some(Ramp { gradient })
        } else {
            None
        }
    }

    #[inline]
    pub fn gradient(self) -> Point {
        self.gradient
    }

    /// Surface height as a fraction of `DEPTH` for a footprint fraction
    /// `(fx, fy)`, each clamped to [0, 1]. Diagonal ramps average both axes,
    /// which keeps the surface planar: 0 at the low corner, 1 at the high one.
    pub fn surface_fraction(self, fx: f32, fy: f32) -> f32 {
        let rise = |g: i32, f: f32| match g {
            1 => Some(f),
            -1 => Some(1.0 - f),
            _ => None,
        };
        let fx = fx.clamp(0.0, 1.0);
        let fy = fy.clamp(0.0, 1.0);
        match (rise(self.gradient.x, fx), rise(self.gradient.y, fy)) {
            (Some(a), Some(b)) => (a + b) * 0.5,
            (Some(a), None) | (None, Some(a)) => a,
            // Ramp::new rejects (0, 0)
            (None, None) => 0.0,
        }
    }
}

/// One grid cell. Slopes are tiles whose `ramp` is set; `collision` is
/// `Slope` exactly when it is. Both are fixed by the constructors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    collision: TileCollision,
    pub style: SeamStyle,
    pub visual: Option<VisualVariant>,
    /// Raw same-layer neighbor mask from the last stitch pass.
    pub neighbors: Neighbors,
    pub min_corner: Vec3,
    pub tint: Tint,
    ramp: Option<Ramp>,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        collision: TileCollision::Empty,
        style: SeamStyle::NONE,
        visual: None,
        neighbors: Neighbors::NONE,
        min_corner: Vec3::ZERO,
        tint: Tint::BONE_WHITE,
        ramp: None,
    };

    pub fn empty(min_corner: Vec3) -> Tile {
        Tile {
            min_corner,
            ..Tile::EMPTY
        }
    }

    pub fn solid(min_corner: Vec3, style: SeamStyle, tint: Tint) -> Tile {
        Tile {
            collision: TileCollision::Solid,
            style,
            visual: Some(VisualVariant::isolated(Sheet::Block)),
            neighbors: Neighbors::NONE,
            min_corner,
            tint,
            ramp: None,
        }
    }

    pub fn landing(min_corner: Vec3, style: SeamStyle, tint: Tint) -> Tile {
        Tile {
            collision: TileCollision::Landing,
            style,
            visual: Some(VisualVariant::isolated(Sheet::Landing)),
            neighbors: Neighbors::NONE,
            min_corner,
            tint,
            ramp: None,
        }
    }

    pub fn slope(min_corner: Vec3, ramp: Ramp, style: SeamStyle, tint: Tint) -> Tile {
        Tile {
            collision: TileCollision::Slope,
            style,
            visual: Some(VisualVariant::isolated(Sheet::Ramp {
                gradient: ramp.gradient(),
            })),
            neighbors: Neighbors::NONE,
            min_corner,
            tint,
            ramp: Some(ramp),
        }
    }

    #[inline]
    pub fn collision(&self) -> TileCollision {
        self.collision
    }

    #[inline]
    pub fn ramp(&self) -> Option<Ramp> {
        self.ramp
    }

    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.visual.is_some()
    }

    /// World Z of the walkable surface at `pos`, for slope tiles only.
    /// `pos` is clamped onto this tile's footprint.
    pub fn height_at(&self, pos: Vec3) -> Option<f32> {
        let ramp = self.ramp?;
        let fx = (pos.x - self.min_corner.x) / FOOT;
        let fy = (pos.y - self.min_corner.y) / FOOT;
        Some(self.min_corner.z + ramp.surface_fraction(fx, fy) * DEPTH)
    }

    /// Records the stitched neighborhood and picks the matching frame.
    pub fn apply_neighbors(&mut self, mask: Neighbors) {
        self.neighbors = mask;
        if let Some(v) = self.visual.as_mut() {
            *v = v.with_neighbors(mask);
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::EMPTY
    }
}
