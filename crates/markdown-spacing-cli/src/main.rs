use anyhow::{Context, Result};
use markdown_spacing_config::Config;
use markdown_spacing_engine::io;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// The file to format, when exactly one argument follows the program name.
fn target_path(args: &[String]) -> Option<PathBuf> {
    match args {
        [_, path] => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Loads the config at `config_path`, falling back to defaults when it is
/// missing or unusable.
fn load_config_from(config_path: &Path) -> Config {
    match Config::load_from_path(config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Continuing with default settings");
            Config::default()
        }
    }
}

fn main() -> Result<()> {
    // Quiet by default so stdout only carries the confirmation line
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = target_path(&args) else {
        let program = args.first().map(String::as_str).unwrap_or("markdown-spacing");
        println!("Usage: {program} <markdown-file>");
        process::exit(1);
    };

    let config = load_config_from(&Config::config_path());
    log::debug!("Write mode: {:?}", config.write_mode);

    let report = io::format_file(&path, config.write_mode)
        .with_context(|| format!("Could not format '{}'", path.display()))?;
    log::info!(
        "{} lines in, {} lines out",
        report.lines_in,
        report.lines_out
    );

    println!("Formatted {}", report.path.display());
    Ok(())
}
