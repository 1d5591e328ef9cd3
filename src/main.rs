#![forbid(unsafe_code)]

mod cli;
mod report;
mod watch;

use std::error::Error;
use std::fs::File;
use std::path::Path;

use clap::Parser;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use strata_geom::Vec3;
use strata_level::{Level, LevelConfig, SpawnLog};
use strata_tiles::Palette;

use cli::{Args, Command};

fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        // file log always keeps debug output
        loggers.push(WriteLogger::new(
            level.max(LevelFilter::Debug),
            Config::default(),
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn load_config(args: &Args) -> Result<LevelConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => LevelConfig::from_path(path)?,
        None if Path::new(cli::DEFAULT_CONFIG).is_file() => {
            LevelConfig::from_path(cli::DEFAULT_CONFIG)?
        }
        None => LevelConfig::default(),
    };
    if let Some(root) = &args.maps {
        config.level.maps_root = root.clone();
    }
    Ok(config)
}

fn load_level(
    map: &str,
    config: &LevelConfig,
    palette: &Palette,
) -> Result<(Level, SpawnLog), Box<dyn Error>> {
    let mut spawns = SpawnLog::new();
    let level = Level::load(map, config, palette, &mut spawns)?;
    Ok((level, spawns))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    let palette = config.palette()?;
    log::debug!(
        "maps root {}, {} glyphs",
        config.level.maps_root.display(),
        palette.len()
    );
    match args.command {
        Command::Info { map } => {
            let (level, spawns) = load_level(&map, &config, &palette)?;
            print!("{}", report::summary(&level, &spawns));
        }
        Command::Probe { map, x, y, z } => {
            let (level, _) = load_level(&map, &config, &palette)?;
            print!("{}", report::probe(&level, Vec3::new(x, y, z)));
        }
        Command::Cast {
            map,
            x,
            y,
            z,
            dx,
            dy,
            dz,
        } => {
            let (level, _) = load_level(&map, &config, &palette)?;
            let hit = level.cast_position(Vec3::new(x, y, z), Vec3::new(dx, dy, dz));
            println!("{:.3} {:.3} {:.3}", hit.x, hit.y, hit.z);
        }
        Command::Dump { map, layer } => {
            let (level, _) = load_level(&map, &config, &palette)?;
            if layer >= level.depth() {
                return Err(format!(
                    "map {:?} has {} layer(s); no layer {}",
                    map,
                    level.depth(),
                    layer
                )
                .into());
            }
            print!("{}", report::dump_layer(&level, layer));
        }
        Command::Watch { map } => watch::run(&map, &config, &palette)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging(args.log_level, args.log_file.as_deref()) {
        eprintln!("logging: {}", e);
    }
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
