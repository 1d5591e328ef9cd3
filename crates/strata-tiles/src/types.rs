use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use serde::Deserialize;

/// Physical classification of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileCollision {
    #[default]
    Empty,
    Solid,
    Landing,
    Slope,
}

impl TileCollision {
    /// Solid and landing cells are flat surfaces something can rest on.
    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, TileCollision::Solid | TileCollision::Landing)
    }
}

/// Material group flags used to decide which neighbors a tile stitches to.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SeamStyle(u8);

impl SeamStyle {
    pub const NONE: SeamStyle = SeamStyle(0);
    pub const FLAT: SeamStyle = SeamStyle(1 << 0);
    pub const SLOPE: SeamStyle = SeamStyle(1 << 1);

    const NAMES: [(SeamStyle, &'static str); 2] =
        [(SeamStyle::FLAT, "flat"), (SeamStyle::SLOPE, "slope")];

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        SeamStyle(bits)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: SeamStyle) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two styles share at least one flag.
    #[inline]
    pub const fn intersects(self, other: SeamStyle) -> bool {
        self.0 & other.0 != 0
    }

    pub fn from_name(name: &str) -> Option<SeamStyle> {
        Self::NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(s, _)| *s)
    }
}

impl BitOr for SeamStyle {
    type Output = SeamStyle;
    #[inline]
    fn bitor(self, rhs: SeamStyle) -> SeamStyle {
        SeamStyle(self.0 | rhs.0)
    }
}

impl BitOrAssign for SeamStyle {
    #[inline]
    fn bitor_assign(&mut self, rhs: SeamStyle) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SeamStyle {
    type Output = SeamStyle;
    #[inline]
    fn bitand(self, rhs: SeamStyle) -> SeamStyle {
        SeamStyle(self.0 & rhs.0)
    }
}

impl fmt::Debug for SeamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(&name.to_ascii_uppercase())?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Cardinal side of a footprint. North is toward y - 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    #[inline]
    pub fn neighbor_bit(self) -> Neighbors {
        match self {
            Side::North => Neighbors::TOP_CENTER,
            Side::East => Neighbors::CENTER_RIGHT,
            Side::South => Neighbors::BOTTOM_CENTER,
            Side::West => Neighbors::CENTER_LEFT,
        }
    }
}

/// 8-neighborhood mask on one layer. "Top" is y - 1, "left" is x - 1.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Neighbors(u8);

impl Neighbors {
    pub const NONE: Neighbors = Neighbors(0);
    pub const TOP_LEFT: Neighbors = Neighbors(1 << 0);
    pub const TOP_CENTER: Neighbors = Neighbors(1 << 1);
    pub const TOP_RIGHT: Neighbors = Neighbors(1 << 2);
    pub const CENTER_LEFT: Neighbors = Neighbors(1 << 3);
    pub const CENTER_RIGHT: Neighbors = Neighbors(1 << 4);
    pub const BOTTOM_LEFT: Neighbors = Neighbors(1 << 5);
    pub const BOTTOM_CENTER: Neighbors = Neighbors(1 << 6);
    pub const BOTTOM_RIGHT: Neighbors = Neighbors(1 << 7);
    pub const ALL: Neighbors = Neighbors(0xFF);

    /// Grid offset (dx, dy) paired with its bit, in bit order.
    pub const OFFSETS: [(i32, i32, Neighbors); 8] = [
        (-1, -1, Neighbors::TOP_LEFT),
        (0, -1, Neighbors::TOP_CENTER),
        (1, -1, Neighbors::TOP_RIGHT),
        (-1, 0, Neighbors::CENTER_LEFT),
        (1, 0, Neighbors::CENTER_RIGHT),
        (-1, 1, Neighbors::BOTTOM_LEFT),
        (0, 1, Neighbors::BOTTOM_CENTER),
        (1, 1, Neighbors::BOTTOM_RIGHT),
    ];

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Neighbors(bits)
    }

    #[inline]
    pub const fn contains(self, other: Neighbors) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Drops corner bits whose two adjacent edges are not both present.
    /// A corner only changes the sprite when it is enclosed by edges, which
    /// collapses the 256 raw masks to the 47 distinct blob frames.
    pub fn reduced(self) -> Neighbors {
        let mut out = self.0 & 0b0101_1010;
        let corner = |c: Neighbors, a: Neighbors, b: Neighbors| {
            if self.contains(c) && self.contains(a) && self.contains(b) {
                c.0
            } else {
                0
            }
        };
        out |= corner(Self::TOP_LEFT, Self::TOP_CENTER, Self::CENTER_LEFT);
        out |= corner(Self::TOP_RIGHT, Self::TOP_CENTER, Self::CENTER_RIGHT);
        out |= corner(Self::BOTTOM_LEFT, Self::BOTTOM_CENTER, Self::CENTER_LEFT);
        out |= corner(Self::BOTTOM_RIGHT, Self::BOTTOM_CENTER, Self::CENTER_RIGHT);
        Neighbors(out)
    }
}

impl BitOr for Neighbors {
    type Output = Neighbors;
    #[inline]
    fn bitor(self, rhs: Neighbors) -> Neighbors {
        Neighbors(self.0 | rhs.0)
    }
}

impl BitOrAssign for Neighbors {
    #[inline]
    fn bitor_assign(&mut self, rhs: Neighbors) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Neighbors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neighbors({:#010b})", self.0)
    }
}

/// Base shading color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const BONE_WHITE: Tint = Tint::new(100, 90, 80);
    pub const DUSK_PURPLE: Tint = Tint::new(48, 25, 52);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `to`; `t` is clamped to [0, 1].
    pub fn lerp(self, to: Tint, t: f32) -> Tint {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Tint::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl From<[u8; 3]> for Tint {
    fn from(v: [u8; 3]) -> Self {
        Tint::new(v[0], v[1], v[2])
    }
}
