use strata_geom::Point;

use crate::types::{Neighbors, Side};

/// Sprite set a renderable tile draws from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sheet {
    Block,
    Landing,
    Ramp { gradient: Point },
}

/// Which sprite to draw: a sheet plus the blob frame picked from the
/// stitched neighborhood. Opaque to everything but the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisualVariant {
    pub sheet: Sheet,
    pub frame: Neighbors,
}

impl VisualVariant {
    /// Variant with no matching neighbors, used until stitching runs.
    #[inline]
    pub const fn isolated(sheet: Sheet) -> Self {
        Self {
            sheet,
            frame: Neighbors::NONE,
        }
    }

    #[inline]
    pub fn with_neighbors(self, mask: Neighbors) -> Self {
        Self {
            sheet: self.sheet,
            frame: mask.reduced(),
        }
    }

    /// Sides without a matching neighbor, i.e. the edges the sprite outlines.
    pub fn exposed_sides(self) -> impl Iterator<Item = Side> {
        Side::ALL
            .into_iter()
            .filter(move |s| !self.frame.contains(s.neighbor_bit()))
    }

    #[inline]
    pub fn is_interior(self) -> bool {
        self.frame == Neighbors::ALL
    }
}
