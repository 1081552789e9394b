//! Locating and loading the TOML configuration file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use deparc::{DepArcError, config::AppConfig};

/// Why a configuration file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid configuration value: {0}")]
    Validation(&'static str),
}

impl From<ConfigError> for DepArcError {
    fn from(err: ConfigError) -> Self {
        DepArcError::Config(err.to_string())
    }
}

/// Project-local configuration file, relative to the working directory.
const LOCAL_CONFIG: &str = "deparc/config.toml";

/// Implicit configuration locations, most specific first.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "deparc", "deparc") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Load the configuration for a run.
///
/// An explicit path must exist. Without one, the first existing file among
/// `deparc/config.toml` and the platform config directory is used, and the
/// defaults apply if neither exists.
///
/// # Errors
///
/// Returns [`DepArcError::Config`] if the explicit file is missing, or if
/// the chosen file does not parse or holds values the layout rejects.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DepArcError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    match candidate_paths().into_iter().find(|path| path.is_file()) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<AppConfig, DepArcError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    validate(&config)?;
    Ok(config)
}

/// Reject sizes the layout cannot work with.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let layout = config.layout();
    let checks = [
        (layout.font_size() > 0, "font_size must be greater than zero"),
        (
            layout.label_font_size() > 0,
            "label_font_size must be greater than zero",
        ),
        (
            layout.level_height() > 0.0,
            "level_height must be greater than zero",
        ),
        (
            layout.token_spacing() >= 0.0,
            "token_spacing must not be negative",
        ),
        (
            layout.min_label_padding() >= 0.0,
            "min_label_padding must not be negative",
        ),
        (
            layout.char_width_factor() > 0.0,
            "char_width_factor must be greater than zero",
        ),
    ];

    match checks.into_iter().find(|(ok, _)| !ok) {
        Some((_, message)) => Err(ConfigError::Validation(message)),
        None => Ok(()),
    }
}
