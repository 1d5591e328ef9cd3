use std::error::Error;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};
use strata_level::{Level, LevelConfig, SpawnLog};
use strata_tiles::Palette;

/// Quiet period after the first event before reloading.
const SETTLE: Duration = Duration::from_millis(150);

fn is_layer_file(path: &Path, map: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.strip_prefix(map)
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|idx| !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit()))
}

fn reload(map: &str, config: &LevelConfig, palette: &Palette) {
    let mut spawns = SpawnLog::new();
    match Level::load(map, config, palette, &mut spawns) {
        Ok(level) => log::info!(
            "reloaded {}: {}x{}x{}, {} spawn(s)",
            map,
            level.width(),
            level.height(),
            level.depth(),
            spawns.entries.len()
        ),
        // keep watching; the next save may fix it
        Err(e) => log::error!("reload {} failed: {}", map, e),
    }
}

/// Blocks, reloading `map` after every change to one of its layer files.
pub fn run(map: &str, config: &LevelConfig, palette: &Palette) -> Result<(), Box<dyn Error>> {
    let dir = config.level.maps_root.join(map);
    reload(map, config, palette);

    let (tx, rx) = mpsc::channel::<()>();
    let map_name = map.to_string();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        match res {
            Ok(event) => match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                    if event.paths.iter().any(|p| is_layer_file(p, &map_name)) {
                        let _ = tx.send(());
                    }
                }
                _ => {}
            },
            Err(e) => log::warn!("watch error: {}", e),
        }
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    log::info!("watching {}", dir.display());

    while rx.recv().is_ok() {
        std::thread::sleep(SETTLE);
        while rx.try_recv().is_ok() {}
        reload(map, config, palette);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_numbered_layer_files_trigger_reload() {
        assert!(is_layer_file(Path::new("maps/dusk/dusk0.txt"), "dusk"));
        assert!(is_layer_file(Path::new("dusk12.txt"), "dusk"));
        assert!(!is_layer_file(Path::new("dusk.txt"), "dusk"));
        assert!(!is_layer_file(Path::new("dusk0.txt~"), "dusk"));
        assert!(!is_layer_file(Path::new("dawn0.txt"), "dusk"));
        assert!(!is_layer_file(Path::new("dusk0a.txt"), "dusk"));
    }

    #[test]
    fn reload_survives_a_broken_map() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("m")).unwrap();
        std::fs::write(dir.path().join("m/m0.txt"), "#?\n").unwrap();
        let mut config = LevelConfig::default();
        config.level.maps_root = dir.path().to_path_buf();
        reload("m", &config, &Palette::standard());
    }
}
