//! Character table mapping map glyphs to tiles and spawn markers.
//!
//! `Palette::standard()` is the built-in table. A `[glyphs]` TOML table can
//! override entries or register extra glyphs (e.g. more spawnable units).

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde::Deserialize;
use strata_geom::{Point, Vec3};

use crate::tile::{Ramp, Tile};
use crate::types::{SeamStyle, Tint};

/// What a spawn glyph asks the unit registry to create.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpawnKind {
    Player,
    Unit(String),
}

impl SpawnKind {
    pub fn from_name(name: &str) -> SpawnKind {
        if name == "player" {
            SpawnKind::Player
        } else {
            SpawnKind::Unit(name.to_string())
        }
    }
}

impl fmt::Display for SpawnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnKind::Player => f.write_str("player"),
            SpawnKind::Unit(name) => f.write_str(name),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileShape {
    Empty,
    Solid,
    Landing,
    Slope(Ramp),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub shape: TileShape,
    pub style: SeamStyle,
    pub tint: Tint,
}

impl TileSpec {
    pub const EMPTY: TileSpec = TileSpec {
        shape: TileShape::Empty,
        style: SeamStyle::NONE,
        tint: Tint::BONE_WHITE,
    };

    pub fn build(&self, min_corner: Vec3) -> Tile {
        match self.shape {
            TileShape::Empty => Tile::empty(min_corner),
            TileShape::Solid => Tile::solid(min_corner, self.style, self.tint),
            TileShape::Landing => Tile::landing(min_corner, self.style, self.tint),
            TileShape::Slope(ramp) => Tile::slope(min_corner, ramp, self.style, self.tint),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Glyph {
    Tile(TileSpec),
    /// Spawn marker: the cell itself is empty; the unit appears at the
    /// footprint center, `lift` layers above the cell's floor.
    Spawn { kind: SpawnKind, lift: f32 },
}

#[derive(Clone, Debug)]
pub struct Palette {
    glyphs: hashbrown::HashMap<char, Glyph>,
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            glyphs: hashbrown::HashMap::new(),
        }
    }

    /// The built-in table every map is written against.
    pub fn standard() -> Self {
        let mut p = Palette::empty();
        let tile = |shape, style| {
            Glyph::Tile(TileSpec {
                shape,
                style,
                tint: Tint::BONE_WHITE,
            })
        };
        p.insert('.', Glyph::Tile(TileSpec::EMPTY));
        for c in ['#', '_', '"', '~'] {
            p.insert(c, tile(TileShape::Solid, SeamStyle::FLAT));
        }
        for c in ['0', 'T'] {
            p.insert(c, tile(TileShape::Landing, SeamStyle::FLAT | SeamStyle::SLOPE));
        }
        let compass = [
            ('1', (1, -1)),
            ('2', (1, 0)),
            ('3', (1, 1)),
            ('4', (0, 1)),
            ('5', (-1, 1)),
            ('6', (-1, 0)),
            ('7', (-1, -1)),
            ('8', (0, -1)),
        ];
        for (c, g) in compass {
            if let Some(ramp) = Ramp::new(Point::from(g)) {
                p.insert(c, tile(TileShape::Slope(ramp), SeamStyle::SLOPE));
            }
        }
        p.insert(
            '@',
            Glyph::Spawn {
                kind: SpawnKind::Player,
                lift: 1.0,
            },
        );
        p.insert(
            'x',
            Glyph::Spawn {
                kind: SpawnKind::Unit("beetle".into()),
                lift: 2.0,
            },
        );
        p
    }

    #[inline]
    pub fn get(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    pub fn insert(&mut self, c: char, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(c, glyph)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Applies `[glyphs]` entries on top of this palette.
    pub fn apply_overrides(&mut self, defs: &HashMap<String, GlyphDef>) -> Result<(), PaletteError> {
        // HashMap iteration order is nondeterministic; sort so the first error reported is stable.
        let mut keys: Vec<&String> = defs.keys().collect();
        keys.sort();
        for key in keys {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(PaletteError::GlyphKey(key.clone())),
            };
            let glyph = defs[key].resolve(c)?;
            self.insert(c, glyph);
        }
        Ok(())
    }

    /// Standard table plus the overrides in a TOML document with a `[glyphs]` table.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PaletteError> {
        let cfg: GlyphsConfig = toml::from_str(toml_str).map_err(PaletteError::Toml)?;
        let mut p = Palette::standard();
        p.apply_overrides(&cfg.glyphs)?;
        Ok(p)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::standard()
    }
}

// --- Config ---

#[derive(Deserialize, Default)]
pub struct GlyphsConfig {
    #[serde(default)]
    pub glyphs: HashMap<String, GlyphDef>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlyphDef {
    // "." = { kind = "empty" }
    Empty,
    // "=" = { kind = "solid", style = ["flat"], tint = [120, 110, 90] }
    Solid {
        style: Option<Vec<String>>,
        tint: Option<Tint>,
    },
    Landing {
        style: Option<Vec<String>>,
        tint: Option<Tint>,
    },
    // "/" = { kind = "slope", gradient = [1, 0] }
    Slope {
        gradient: [i32; 2],
        style: Option<Vec<String>>,
        tint: Option<Tint>,
    },
    // "b" = { kind = "spawn", unit = "bat", lift = 3.0 }
    Spawn {
        unit: String,
        #[serde(default = "default_lift")]
        lift: f32,
    },
}

fn default_lift() -> f32 {
    1.0
}

impl GlyphDef {
    fn resolve(&self, c: char) -> Result<Glyph, PaletteError> {
        let styles = |names: &Option<Vec<String>>, fallback: SeamStyle| -> Result<SeamStyle, PaletteError> {
            let Some(names) = names else {
                return Ok(fallback);
            };
            let mut out = SeamStyle::NONE;
            for n in names {
                out |= SeamStyle::from_name(n).ok_or_else(|| PaletteError::Style {
                    glyph: c,
                    name: n.clone(),
                })?;
            }
            Ok(out)
        };
        let spec = |shape, style, tint: &Option<Tint>| {
            Glyph::Tile(TileSpec {
                shape,
                style,
                tint: tint.unwrap_or(Tint::BONE_WHITE),
            })
        };
        Ok(match self {
            GlyphDef::Empty => Glyph::Tile(TileSpec::EMPTY),
            GlyphDef::Solid { style, tint } => {
                spec(TileShape::Solid, styles(style, SeamStyle::FLAT)?, tint)
            }
            GlyphDef::Landing { style, tint } => spec(
                TileShape::Landing,
                styles(style, SeamStyle::FLAT | SeamStyle::SLOPE)?,
                tint,
            ),
            GlyphDef::Slope {
                gradient,
                style,
                tint,
            } => {
                let g = Point::new(gradient[0], gradient[1]);
                let ramp = Ramp::new(g).ok_or(PaletteError::Gradient { glyph: c, gradient: g })?;
                spec(TileShape::Slope(ramp), styles(style, SeamStyle::SLOPE)?, tint)
            }
            GlyphDef::Spawn { unit, lift } => Glyph::Spawn {
                kind: SpawnKind::from_name(unit),
                lift: *lift,
            },
        })
    }
}

#[derive(Debug)]
pub enum PaletteError {
    Toml(toml::de::Error),
    /// Table keys must be exactly one character.
    GlyphKey(String),
    Gradient { glyph: char, gradient: Point },
    Style { glyph: char, name: String },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Toml(e) => write!(f, "glyph table: {}", e),
            PaletteError::GlyphKey(k) => write!(f, "glyph key {:?} is not a single character", k),
            PaletteError::Gradient { glyph, gradient } => write!(
                f,
                "glyph {:?}: gradient ({}, {}) must use components in -1..=1 and not be (0, 0)",
                glyph, gradient.x, gradient.y
            ),
            PaletteError::Style { glyph, name } => {
                write!(f, "glyph {:?}: unknown seam style {:?}", glyph, name)
            }
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PaletteError::Toml(e) => Some(e),
            _ => None,
        }
    }
}
