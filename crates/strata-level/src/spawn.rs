use strata_geom::Vec3;
use strata_tiles::SpawnKind;

/// Unit registry seam: receives spawn requests for marker glyphs.
/// The level never tracks what gets spawned.
pub trait SpawnSink {
    fn spawn(&mut self, kind: SpawnKind, at: Vec3);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spawn {
    pub kind: SpawnKind,
    pub at: Vec3,
}

/// Records spawn requests in arrival order.
#[derive(Clone, Debug, Default)]
pub struct SpawnLog {
    pub entries: Vec<Spawn>,
}

impl SpawnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> impl Iterator<Item = &Spawn> {
        self.entries.iter().filter(|s| s.kind == SpawnKind::Player)
    }
}

impl SpawnSink for SpawnLog {
    fn spawn(&mut self, kind: SpawnKind, at: Vec3) {
        self.entries.push(Spawn { kind, at });
    }
}
