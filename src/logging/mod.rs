// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;

use log::LevelFilter;

use crate::core::Config;
use crate::utils::ensure_parent_dir;

/// Install the global logger. Records go to `config.log_file` when set,
/// otherwise to stderr. `verbose` raises the level to debug.
pub fn init(config: &Config, verbose: bool) -> io::Result<()> {
    let level = if verbose {
        config.log_level.max(LevelFilter::Debug)
    } else {
        config.log_level
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        ensure_parent_dir(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    Ok(())
}
