use super::*;
use crate::stitch::{neighbor_mask, stitch};
use strata_tiles::coords::min_corner;
use strata_tiles::{Neighbors, Palette, SeamStyle, Tile, Tint};

fn solid(x: usize, y: usize, z: usize) -> Tile {
    Tile::solid(min_corner(x as i32, y as i32, z as i32), SeamStyle::FLAT, Tint::BONE_WHITE)
}

fn grid_from(layers: &[&str]) -> TileGrid {
    let mut log = SpawnLog::new();
    parse_layers(layers, &Palette::standard(), &mut log).expect("layers parse")
}

#[test]
fn idx_and_coords_of_agree() {
    let g = TileGrid::new(3, 4, 2);
    let mut seen = vec![false; g.len()];
    for z in 0..2 {
        for y in 0..4 {
            for x in 0..3 {
                let i = g.idx(x, y, z);
                assert!(!seen[i]);
                seen[i] = true;
                assert_eq!(g.coords_of(i), (x, y, z));
            }
        }
    }
    assert!(seen.into_iter().all(|b| b));
    // x varies fastest, one layer is contiguous
    assert_eq!(g.idx(1, 0, 0), 1);
    assert_eq!(g.idx(0, 1, 0), 3);
    assert_eq!(g.idx(0, 0, 1), 12);
}

#[test]
fn new_grid_places_empty_tiles_at_min_corners() {
    let g = TileGrid::new(2, 2, 2);
    let t = g.get(1, 0, 1).unwrap();
    assert_eq!(t.min_corner, min_corner(1, 0, 1));
    assert!(!t.is_renderable());
    assert!(g.get(2, 0, 0).is_none());
    assert!(g.get(0, -1, 0).is_none());
}

#[test]
fn set_out_of_range_is_refused() {
    let mut g = TileGrid::new(1, 1, 1);
    assert!(!g.set(1, 0, 0, solid(1, 0, 0)));
    assert!(g.set(0, 0, 0, solid(0, 0, 0)));
    assert_eq!(g.style(0, 0, 0), SeamStyle::FLAT);
}

#[test]
#[should_panic]
fn zero_sized_grid_panics() {
    let _ = TileGrid::new(0, 1, 1);
}

#[test]
fn mask_bits_follow_neighbor_positions() {
    // only the tile to the south-east (x+1, y+1) matches the center
    let g = grid_from(&["...\n.#.\n..#"]);
    let m = neighbor_mask(&g, 1, 1, 0, SeamStyle::FLAT);
    assert_eq!(m, Neighbors::BOTTOM_RIGHT);
    let m = neighbor_mask(&g, 2, 2, 0, SeamStyle::FLAT);
    assert_eq!(m, Neighbors::TOP_LEFT);
}

#[test]
fn stitch_ignores_other_layers_and_unrelated_styles() {
    // slope tiles beside a flat block do not stitch to it; the landing
    // above does not count either since masks are per layer
    let g = grid_from(&["2#2", "0.."]);
    let block = g.get(1, 0, 0).unwrap();
    assert_eq!(block.neighbors, Neighbors::NONE);
    let landing = g.get(0, 0, 1).unwrap();
    assert_eq!(landing.neighbors, Neighbors::NONE);
}

#[test]
fn landing_stitches_to_both_flat_and_slope_neighbors() {
    let g = grid_from(&["#0.\n2.."]);
    let landing = g.get(1, 0, 0).unwrap();
    assert_eq!(
        landing.neighbors,
        Neighbors::CENTER_LEFT | Neighbors::BOTTOM_LEFT
    );
    // the frame drops the lone corner
    assert_eq!(landing.visual.unwrap().frame, Neighbors::CENTER_LEFT);
}

#[test]
fn empty_tiles_are_not_stitched() {
    let g = grid_from(&["##\n#."]);
    let hole = g.get(1, 1, 0).unwrap();
    assert_eq!(hole.neighbors, Neighbors::NONE);
    assert!(hole.visual.is_none());
}

#[test]
fn stitch_twice_is_idempotent() {
    let mut g = grid_from(&["#0#2\n~1.#\nT..\""]);
    let before: Vec<_> = g.iter().map(|(_, t)| (t.neighbors, t.visual)).collect();
    let visited = stitch(&mut g);
    let after: Vec<_> = g.iter().map(|(_, t)| (t.neighbors, t.visual)).collect();
    assert_eq!(before, after);
    assert_eq!(visited, g.iter().filter(|(_, t)| t.is_renderable()).count());
}

#[test]
fn stitch_does_not_touch_collision() {
    let raw = {
        let mut g = TileGrid::new(2, 1, 1);
        g.set(0, 0, 0, solid(0, 0, 0));
        g
    };
    let mut stitched = raw.clone();
    stitch(&mut stitched);
    for ((a, ta), (_, tb)) in raw.iter().zip(stitched.iter()) {
        assert_eq!(ta.collision(), tb.collision(), "collision changed at {:?}", a);
        assert_eq!(ta.style, tb.style);
    }
}

#[test]
fn hand_built_grid_is_stitched_on_wrap() {
    let mut g = TileGrid::new(2, 1, 1);
    g.set(0, 0, 0, solid(0, 0, 0));
    g.set(1, 0, 0, solid(1, 0, 0));
    let level = Level::from_grid("hand", g, 0);
    assert_eq!(level.tile(0, 0, 0).unwrap().neighbors, Neighbors::CENTER_RIGHT);
    assert_eq!(level.tile(1, 0, 0).unwrap().neighbors, Neighbors::CENTER_LEFT);
    let p = strata_geom::Vec3::new(40.0, 8.0, 2.0);
    assert_eq!(level.style_at(p), SeamStyle::FLAT);
    assert_eq!(level.style_at(strata_geom::Vec3::new(-1.0, 8.0, 2.0)), SeamStyle::NONE);
}

#[test]
fn level_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Level>();
}

#[test]
fn hand_built_slope_answers_height_queries() {
    use strata_geom::{Point, Vec3};
    use strata_tiles::Ramp;

    let mut g = TileGrid::new(1, 1, 1);
    let ramp = Ramp::new(Point::new(1, 0)).unwrap();
    g.set(0, 0, 0, Tile::slope(min_corner(0, 0, 0), ramp, SeamStyle::SLOPE, Tint::BONE_WHITE));
    let level = Level::from_grid("hand", g, 0);
    let t = level.tile(0, 0, 0).unwrap();
    assert_eq!(t.ramp(), Some(ramp));
    assert_eq!(level.try_slope_height(Vec3::new(16.0, 8.0, 2.0)), Some(8.0));
}
