//! World <-> grid coordinate mapping.
//!
//! Grid cells are `FOOT` wide on X/Y and `DEPTH` tall on Z. All conversions
//! floor toward negative infinity so indices stay continuous across the origin;
//! none of them bounds-check.

use strata_geom::{Vec2, Vec3};

/// Horizontal cell size in world units.
pub const FOOT: f32 = 32.0;
/// Vertical layer thickness in world units.
pub const DEPTH: f32 = 16.0;
/// Offset from a cell's min corner to the center of its footprint.
pub const ORIGIN: Vec2 = Vec2::new(FOOT / 2.0, FOOT / 2.0);

#[inline]
pub fn grid_xy(v: f32) -> i32 {
    (v / FOOT).floor() as i32
}

#[inline]
pub fn grid_z(v: f32) -> i32 {
    (v / DEPTH).floor() as i32
}

#[inline]
pub fn grid_cell(pos: Vec3) -> (i32, i32, i32) {
    (grid_xy(pos.x), grid_xy(pos.y), grid_z(pos.z))
}

#[inline]
pub fn min_corner(x: i32, y: i32, z: i32) -> Vec3 {
    Vec3::new(x as f32 * FOOT, y as f32 * FOOT, z as f32 * DEPTH)
}

/// Center of the footprint, lifted `layers` cell heights above the min corner.
#[inline]
pub fn footprint_center(x: i32, y: i32, z: i32, layers: f32) -> Vec3 {
    min_corner(x, y, z) + Vec3::from_xy(ORIGIN, DEPTH * layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_inputs_floor() {
        assert_eq!(grid_xy(-1.0), -1);
        assert_eq!(grid_xy(-FOOT), -1);
        assert_eq!(grid_xy(-FOOT - 0.5), -2);
        assert_eq!(grid_z(-0.01), -1);
        assert_eq!(grid_z(0.0), 0);
    }

    #[test]
    fn cell_edges_belong_to_upper_cell() {
        assert_eq!(grid_xy(FOOT), 1);
        assert_eq!(grid_xy(FOOT - 0.001), 0);
        assert_eq!(grid_z(DEPTH * 3.0), 3);
    }

    #[test]
    fn footprint_center_lifts_by_layers() {
        let p = footprint_center(2, 1, 0, 1.0);
        assert_eq!(p, Vec3::new(2.0 * FOOT + FOOT / 2.0, FOOT + FOOT / 2.0, DEPTH));
        assert_eq!(grid_cell(p), (2, 1, 1));
    }
}
