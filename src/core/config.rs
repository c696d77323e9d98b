use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{GenerationConfig, GenerationMode};

const FALLBACK_STORE_PATH: &str = "./data/store.json";

// Configuration for the generator and its local store
#[derive(Debug, Clone)]
pub struct Config {
    // Store; `None` means the per-user config directory
    pub store_path: Option<PathBuf>,

    // Password Generation
    pub default_password_length: usize,
    pub default_password_mode: GenerationMode,
    pub default_exclude_ambiguous: bool,
    pub default_avoid_repeating: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Problems found while loading, held until a logger is installed.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Store
            store_path: None,

            // Password Generation
            default_password_length: 16,
            default_password_mode: GenerationMode::Standard,
            default_exclude_ambiguous: false,
            default_avoid_repeating: false,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Store
        if let Some(path) = lookup("PASSFORGE_STORE").filter(|p| !p.trim().is_empty()) {
            config.store_path = Some(PathBuf::from(path));
        }

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(mode) = parse_var(&lookup, "DEFAULT_PASSWORD_MODE", &mut warnings) {
            config.default_password_mode = mode;
        }

        if let Some(exclude) = parse_var(&lookup, "DEFAULT_EXCLUDE_AMBIGUOUS", &mut warnings) {
            config.default_exclude_ambiguous = exclude;
        }

        if let Some(avoid) = parse_var(&lookup, "DEFAULT_AVOID_REPEATING", &mut warnings) {
            config.default_avoid_repeating = avoid;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.parse::<LevelFilter>() {
                Ok(filter) => config.log_level = filter,
                Err(_) => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.warnings = warnings;
        config
    }

    /// Emit the warnings collected by [`Config::load`]. Call once logging is up.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    /// Store location: `explicit` if given, then the configured path, then
    /// `store.json` in the app config directory. The directory is only
    /// created when that last default is used.
    pub fn resolve_store_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit.or_else(|| self.store_path.clone()) {
            return path;
        }

        match crate::utils::get_app_config_dir() {
            Some(dir) => dir.join("store.json"),
            None => PathBuf::from(FALLBACK_STORE_PATH),
        }
    }

    /// Generation settings seeded from the configured defaults.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            exclude_ambiguous: self.default_exclude_ambiguous,
            avoid_repeating: self.default_avoid_repeating,
            mode: self.default_password_mode,
            ..GenerationConfig::default()
        }
    }
}

// Read and parse a variable, noting values that don't parse
fn parse_var<T, F>(lookup: &F, name: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring {}='{}': not a valid value", name, raw));
            None
        }
    }
}
