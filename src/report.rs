//! Plain-text reports for the CLI.

use std::fmt::Write as _;

use hashbrown::HashMap;
use strata_geom::Vec3;
use strata_level::{Level, SpawnLog};
use strata_tiles::coords::grid_cell;
use strata_tiles::{Side, Tile, TileCollision};

const KINDS: [TileCollision; 4] = [
    TileCollision::Solid,
    TileCollision::Landing,
    TileCollision::Slope,
    TileCollision::Empty,
];

pub fn summary(level: &Level, spawns: &SpawnLog) -> String {
    let mut counts: HashMap<TileCollision, usize> = HashMap::new();
    for (_, tile) in level.grid().iter() {
        *counts.entry(tile.collision()).or_default() += 1;
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {}x{}x{} (ground level {}, gravity {})",
        level.name(),
        level.width(),
        level.height(),
        level.depth(),
        level.ground_level(),
        level.gravity()
    );
    for kind in KINDS {
        let _ = writeln!(out, "  {:<8} {}", format!("{:?}", kind), counts.get(&kind).copied().unwrap_or(0));
    }
    let _ = writeln!(out, "spawns: {}", spawns.entries.len());
    for s in &spawns.entries {
        let _ = writeln!(out, "  {} at ({:.1}, {:.1}, {:.1})", s.kind, s.at.x, s.at.y, s.at.z);
    }
    out
}

pub fn probe(level: &Level, pos: Vec3) -> String {
    let (x, y, z) = grid_cell(pos);
    let mut out = String::new();
    let _ = writeln!(out, "cell      ({}, {}, {})", x, y, z);
    let _ = writeln!(out, "collision {:?}", level.collision(x, y, z));
    let _ = writeln!(out, "style     {:?}", level.style(x, y, z));
    match level.try_slope_height(pos) {
        Some(h) => {
            let _ = writeln!(out, "surface   {:.3}", h);
        }
        None => {
            let _ = writeln!(out, "surface   -");
        }
    }
    out
}

/// One character per cell: `.` empty, `#` fully surrounded, `+` only
/// corners open, otherwise a hex digit of the open sides (N=1 E=2 S=4 W=8).
pub fn frame_char(tile: &Tile) -> char {
    let Some(v) = tile.visual else {
        return '.';
    };
    let open = v.exposed_sides().fold(0u32, |acc, side| {
        acc | match side {
            Side::North => 1,
            Side::East => 2,
            Side::South => 4,
            Side::West => 8,
        }
    });
    match open {
        0 if v.is_interior() => '#',
        0 => '+',
        n => char::from_digit(n, 16).unwrap_or('?'),
    }
}

/// # Panics
/// If `layer` is not below the level's depth.
pub fn dump_layer(level: &Level, layer: usize) -> String {
    let grid = level.grid();
    let mut out = String::new();
    let _ = writeln!(out, "{} layer {} ({}x{})", level.name(), layer, grid.width(), grid.height());
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| frame_char(grid.get_local(x, y, layer)))
            .collect();
        out.push_str(&row);
        out.push('\n');
    }
    out
}
