use std::fs;
use std::path::Path;

use strata_level::{Level, LevelConfig, MapError, MapLoader, SpawnLog};
use strata_tiles::{Palette, TileCollision};
use tempfile::tempdir;

fn write_layer(root: &Path, map: &str, index: usize, text: &str) {
    let dir = root.join(map);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}{}.txt", map, index)), text).unwrap();
}

#[test]
fn discovery_stops_at_first_gap() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "dusk", 0, "##\n##\n");
    write_layer(dir.path(), "dusk", 1, "0.\n..\n");
    write_layer(dir.path(), "dusk", 3, "##\n##\n");

    let palette = Palette::standard();
    let loader = MapLoader::new(dir.path(), &palette);
    assert_eq!(loader.discover("dusk").len(), 2);

    let mut spawns = SpawnLog::new();
    let grid = loader.load("dusk", &mut spawns).unwrap();
    assert_eq!((grid.width(), grid.height(), grid.depth()), (2, 2, 2));
    assert_eq!(grid.get(0, 0, 1).unwrap().collision(), TileCollision::Landing);
}

#[test]
fn layer_files_saved_with_bom_load() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "win", 0, "\u{feff}#0\r\n12\r\n");
    let palette = Palette::standard();
    let mut spawns = SpawnLog::new();
    let grid = MapLoader::new(dir.path(), &palette)
        .load("win", &mut spawns)
        .unwrap();
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid.get(0, 0, 0).unwrap().collision(), TileCollision::Solid);
    assert_eq!(grid.get(1, 1, 0).unwrap().collision(), TileCollision::Slope);
}

#[test]
fn missing_first_layer_is_an_error() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "dusk", 1, "##\n");
    let palette = Palette::standard();
    let mut spawns = SpawnLog::new();
    let err = MapLoader::new(dir.path(), &palette)
        .load("dusk", &mut spawns)
        .unwrap_err();
    match err {
        MapError::MissingLayer { map, path } => {
            assert_eq!(map, "dusk");
            assert!(path.ends_with("dusk/dusk0.txt"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn mismatched_layer_shape_is_rejected() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "m", 0, "###\n###\n");
    write_layer(dir.path(), "m", 1, "###\n");
    let palette = Palette::standard();
    let mut spawns = SpawnLog::new();
    let err = MapLoader::new(dir.path(), &palette)
        .load("m", &mut spawns)
        .unwrap_err();
    assert!(matches!(err, MapError::LayerShape { layer: 1, .. }));
}

#[test]
fn empty_layer_file_is_rejected() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "m", 0, "");
    let palette = Palette::standard();
    let mut spawns = SpawnLog::new();
    let err = MapLoader::new(dir.path(), &palette)
        .load("m", &mut spawns)
        .unwrap_err();
    assert!(matches!(err, MapError::EmptyLayer { layer: 0 }));
}

#[test]
fn unknown_glyph_reports_its_cell() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "m", 0, "###\n###\n");
    write_layer(dir.path(), "m", 1, "...\n..Q\n");
    let palette = Palette::standard();
    let mut spawns = SpawnLog::new();
    let err = MapLoader::new(dir.path(), &palette)
        .load("m", &mut spawns)
        .unwrap_err();
    assert!(matches!(
        err,
        MapError::UnknownGlyph {
            glyph: 'Q',
            x: 2,
            y: 1,
            z: 1
        }
    ));
    assert_eq!(err.to_string(), "unsupported character 'Q' at 2, 1, depth of 1");
}

#[test]
fn level_load_uses_config_settings_and_glyphs() {
    let dir = tempdir().unwrap();
    write_layer(dir.path(), "yard", 0, "#Q\n@.\n");
    let toml = format!(
        r#"
[level]
maps_root = {:?}
ground_level = 1
gravity = -7.5

[glyphs]
Q = {{ kind = "spawn", unit = "beetle" }}
"#,
        dir.path().display().to_string()
    );
    let config = LevelConfig::from_toml_str(&toml).unwrap();
    let palette = config.palette().unwrap();
    let mut spawns = SpawnLog::new();
    let level = Level::load("yard", &config, &palette, &mut spawns).unwrap();

    assert_eq!(level.name(), "yard");
    assert_eq!(level.ground_level(), 1);
    assert_eq!(level.gravity(), -7.5);
    assert_eq!(spawns.entries.len(), 2);
    assert_eq!(spawns.players().count(), 1);
    // beside the map, layer 0 sits under ground level
    assert_eq!(level.collision(5, 0, 0), TileCollision::Solid);
    assert_eq!(level.collision(1, 0, 0), TileCollision::Empty);
}

#[test]
fn config_file_defaults_apply() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strata.toml");
    fs::write(&path, "[level]\nground_level = 2\n").unwrap();
    let config = LevelConfig::from_path(&path).unwrap();
    assert_eq!(config.level.ground_level, 2);
    assert_eq!(config.level.gravity, -5.0);
    assert!(config.level.maps_root.ends_with("assets/maps"));
    assert!(config.glyphs.is_empty());

    let missing = LevelConfig::from_path(dir.path().join("nope.toml"));
    assert!(missing.is_err());
}
