//! Tile, slope, seam, and glyph palette crate.
#![forbid(unsafe_code)]

pub mod coords;
pub mod palette;
pub mod tile;
pub mod types;
pub mod variant;

pub use palette::{Glyph, Palette, PaletteError, SpawnKind, TileShape, TileSpec};
pub use tile::{Ramp, Tile};
pub use types::{Neighbors, SeamStyle, Side, TileCollision, Tint};
pub use variant::{Sheet, VisualVariant};
