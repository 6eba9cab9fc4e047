//! Solar scene entry point.
//!
//! Opens a window with an Earth sprite drifting across the view and a Moon
//! orbiting it with a pulsing orbit, rendered with wgpu.
//!
//! Run with: `cargo run -p solar-app`

use clap::Parser;
use solar_app::PlatformDirs;
use solar_config::{CliArgs, Config};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Resolve OS directories for config and logs. The scene can still run
    // with defaults if the OS refuses to provide them.
    let platform_dirs = match PlatformDirs::resolve_and_create() {
        Ok(dirs) => Some(dirs),
        Err(e) => {
            eprintln!("warning: could not prepare platform directories: {e}");
            None
        }
    };

    let config_dir = args
        .config
        .clone()
        .or_else(|| platform_dirs.as_ref().map(|d| d.config_dir.clone()));

    let mut config = match &config_dir {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    solar_log::init_logging(
        platform_dirs.as_ref().map(|d| d.log_dir.as_path()),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Solar scene");
    info!(
        "Window: {}x{} | Title: {} | vsync: {}",
        config.window.width, config.window.height, config.window.title, config.window.vsync
    );
    info!(
        "Sprites: earth={}, moon={}",
        config.assets.earth_sprite.display(),
        config.assets.moon_sprite.display()
    );

    if let Err(e) = solar_app::run(config) {
        error!("Fatal: {e}");
        std::process::exit(1);
    }
}
