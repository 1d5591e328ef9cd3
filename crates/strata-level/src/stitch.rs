//! Contextual seam stitching: picks each renderable tile's frame from the
//! seam styles of its eight same-layer neighbors.

use strata_tiles::{Neighbors, SeamStyle};

use crate::grid::TileGrid;

/// Mask of neighbors on layer `z` sharing at least one flag with `style`.
pub fn neighbor_mask(grid: &TileGrid, x: i32, y: i32, z: i32, style: SeamStyle) -> Neighbors {
    let mut hood = Neighbors::NONE;
    for (dx, dy, bit) in Neighbors::OFFSETS {
        if grid.style(x + dx, y + dy, z).intersects(style) {
            hood |= bit;
        }
    }
    hood
}

/// Stitches every renderable tile and returns how many were visited.
///
/// Must run once the whole grid is populated: masks are read from the
/// finished grid before any tile is written, so the result depends only on
/// seam styles and a second pass changes nothing.
pub fn stitch(grid: &mut TileGrid) -> usize {
    let masks: Vec<(usize, Neighbors)> = grid
        .iter()
        .filter(|(_, t)| t.is_renderable())
        .map(|((x, y, z), t)| {
            (
                grid.idx(x, y, z),
                neighbor_mask(grid, x as i32, y as i32, z as i32, t.style),
            )
        })
        .collect();
    let tiles = grid.tiles_mut();
    for &(i, mask) in &masks {
        tiles[i].apply_neighbors(mask);
    }
    log::debug!(target: "map", "stitched {} tiles", masks.len());
    masks.len()
}
