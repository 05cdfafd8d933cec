pub mod error;
pub mod settings;

pub use error::*;
pub use settings::*;

use std::path::{Path, PathBuf};

/// Environment variable pointing directly at a config file
pub const CONFIG_PATH_ENV: &str = "YCFLOW_CONFIG_PATH";

const LOCAL_CANDIDATES: [&str; 2] = ["ycflow.yaml", ".ycflow.yaml"];

/// Directory of the user-wide config file (`~/.config/ycflow` on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ycflow"))
}

/// Locate the config file.
///
/// Search order:
/// 1. `YCFLOW_CONFIG_PATH` (must exist when set)
/// 2. current directory: `ycflow.yaml`, `.ycflow.yaml`
/// 3. `<config dir>/ycflow/config.yaml`
///
/// Returns `None` when nothing is found.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(ConfigError::ConfigFileNotFound(path));
    }

    let current_dir = std::env::current_dir()?;
    for filename in &LOCAL_CANDIDATES {
        let path = current_dir.join(filename);
        if path.is_file() {
            return Ok(Some(path));
        }
    }

    if let Some(dir) = config_dir() {
        let global_config = dir.join("config.yaml");
        if global_config.is_file() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}

/// Load the config file found by [`find_config_file`], or the built-in
/// defaults when there is none.
pub fn load_config() -> Result<Config> {
    match find_config_file()? {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load a config file. An empty file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {}", path.display());

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
