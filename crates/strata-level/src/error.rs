use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Fatal map load failures. None of these leave a usable level behind.
#[derive(Debug)]
pub enum MapError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `<map>0.txt` was not found under the maps root.
    MissingLayer { map: String, path: PathBuf },
    /// In-memory load given no layers at all.
    NoLayers,
    /// Layer has no rows, or its first row is empty.
    EmptyLayer { layer: usize },
    /// `line` is 1-based within the layer file.
    RaggedLine {
        layer: usize,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Layer's (width, height) differs from layer 0.
    LayerShape {
        layer: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },
    UnknownGlyph {
        glyph: char,
        x: usize,
        y: usize,
        z: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            MapError::MissingLayer { map, path } => {
                write!(f, "map {:?}: first layer {} not found", map, path.display())
            }
            MapError::NoLayers => write!(f, "map has no layers"),
            MapError::EmptyLayer { layer } => write!(f, "layer {} is empty", layer),
            MapError::RaggedLine {
                layer,
                line,
                expected,
                found,
            } => write!(
                f,
                "layer {}: the length of line {} is {} but preceding lines are {} wide",
                layer, line, found, expected
            ),
            MapError::LayerShape {
                layer,
                expected,
                found,
            } => write!(
                f,
                "layer {} is {}x{} but layer 0 is {}x{}",
                layer, found.0, found.1, expected.0, expected.1
            ),
            MapError::UnknownGlyph { glyph, x, y, z } => write!(
                f,
                "unsupported character {:?} at {}, {}, depth of {}",
                glyph, x, y, z
            ),
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MapError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
