use strata_tiles::coords::min_corner;
use strata_tiles::{SeamStyle, Tile};

/// Dense `width x height x depth` tile arena. Index is `x + y*w + z*w*h`,
/// so one layer is a contiguous run of rows.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    depth: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Grid of empty tiles with their min corners set.
    ///
    /// # Panics
    /// If any dimension is zero.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        assert!(
            width > 0 && height > 0 && depth > 0,
            "grid dimensions must be positive, got {}x{}x{}",
            width,
            height,
            depth
        );
        let mut tiles = Vec::with_capacity(width * height * depth);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    tiles.push(Tile::empty(min_corner(x as i32, y as i32, z as i32)));
                }
            }
        }
        Self {
            width,
            height,
            depth,
            tiles,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.width + z * self.width * self.height
    }

    #[inline]
    pub fn coords_of(&self, i: usize) -> (usize, usize, usize) {
        let layer = self.width * self.height;
        (i % self.width, (i % layer) / self.width, i / layer)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && (z as usize) < self.depth
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<&Tile> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(&self.tiles[self.idx(x as usize, y as usize, z as usize)])
    }

    /// Unchecked-by-policy accessor; panics when out of range.
    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> &Tile {
        assert!(
            x < self.width && y < self.height && z < self.depth,
            "tile ({}, {}, {}) outside {}x{}x{} grid",
            x,
            y,
            z,
            self.width,
            self.height,
            self.depth
        );
        &self.tiles[self.idx(x, y, z)]
    }

    /// Places a tile; returns false (and does nothing) when out of range.
    pub fn set(&mut self, x: usize, y: usize, z: usize, tile: Tile) -> bool {
        if x >= self.width || y >= self.height || z >= self.depth {
            return false;
        }
        let i = self.idx(x, y, z);
        self.tiles[i] = tile;
        true
    }

    /// Seam style with no ground extension: anything outside the grid is `NONE`.
    #[inline]
    pub fn style(&self, x: i32, y: i32, z: i32) -> SeamStyle {
        self.get(x, y, z).map(|t| t.style).unwrap_or(SeamStyle::NONE)
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (self.coords_of(i), t))
    }

    #[inline]
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}
