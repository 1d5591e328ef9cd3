//! Per-frame draw dispatch. The level decides which variant to draw where;
//! batching and sprites belong to the renderer.

use std::f32::consts::FRAC_PI_2;

use strata_geom::{Vec2, Vec3};
use strata_tiles::coords::min_corner;
use strata_tiles::{Tint, VisualVariant};

use crate::level::Level;

/// Camera values the draw pass needs; opaque otherwise.
pub trait CameraView {
    /// Yaw in radians.
    fn rotation(&self) -> f32;
    /// Screen-space offset per layer of height.
    fn perspective(&self) -> f32;
}

pub trait TileRenderer {
    /// Called once per frame before any tile.
    fn set_spin(&mut self, spin: Vec2);
    fn draw_tile(&mut self, variant: VisualVariant, at: Vec3, tint: Tint);
    /// Backdrop for a cell on the ground layer.
    fn draw_ground(&mut self, at: Vec3);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub tiles: usize,
    pub ground: usize,
}

impl Level {
    /// Screen direction that layer height is extruded along.
    pub fn spin(camera: &dyn CameraView) -> Vec2 {
        let angle = -camera.rotation() - FRAC_PI_2;
        Vec2::from_angle(angle) * camera.perspective()
    }

    /// Fades `color` toward dusk purple the deeper `pos` sits below the ceiling.
    pub fn shade(&self, color: Tint, pos: Vec3) -> Tint {
        let ceiling = self.ceiling();
        color.lerp(Tint::DUSK_PURPLE, 1.0 - pos.z / ceiling)
    }

    /// Walks layers bottom-up, rows, then columns.
    pub fn draw(&self, camera: &dyn CameraView, renderer: &mut dyn TileRenderer) -> DrawStats {
        renderer.set_spin(Level::spin(camera));
        let mut stats = DrawStats::default();
        let ground = self.ground_level();
        for ((x, y, z), tile) in self.grid().iter() {
            if let Some(variant) = tile.visual {
                renderer.draw_tile(variant, tile.min_corner, self.shade(tile.tint, tile.min_corner));
                stats.tiles += 1;
            }
            if z as i32 == ground {
                renderer.draw_ground(min_corner(x as i32, y as i32, z as i32));
                stats.ground += 1;
            }
        }
        stats
    }
}
