use strata_tiles::coords::{DEPTH, FOOT, grid_cell, grid_xy, grid_z, min_corner};
use proptest::prelude::*;

proptest! {
    // Cell min corners map back to their own index on every axis
    #[test]
    fn min_corner_roundtrip(x in -10_000i32..10_000, y in -10_000i32..10_000, z in -1_000i32..1_000) {
        prop_assert_eq!(grid_xy(x as f32 * FOOT), x);
        prop_assert_eq!(grid_z(z as f32 * DEPTH), z);
        prop_assert_eq!(grid_cell(min_corner(x, y, z)), (x, y, z));
    }

    // Any point strictly inside a cell maps to that cell (floor, not truncation)
    #[test]
    fn interior_points_floor_into_cell(x in -1_000i32..1_000, f in 0.0f32..0.99) {
        prop_assert_eq!(grid_xy((x as f32 + f) * FOOT), x);
        prop_assert_eq!(grid_z((x as f32 + f) * DEPTH), x);
    }

    // Monotonic: larger world coordinates never map to smaller indices
    #[test]
    fn grid_xy_monotonic(a in -1e5f32..1e5, b in -1e5f32..1e5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(grid_xy(lo) <= grid_xy(hi));
        prop_assert!(grid_z(lo) <= grid_z(hi));
    }
}

#[test]
fn small_negative_offsets_land_in_minus_one() {
    assert_eq!(grid_xy(-1.0), -1);
    assert_eq!(grid_xy(-0.0001), -1);
    assert_eq!(grid_z(-1.0), -1);
}
