use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "config file {0} does not exist\n\nHint:\n  • unset YCFLOW_CONFIG_PATH to fall back to ./ycflow.yaml or ~/.config/ycflow/config.yaml"
    )]
    ConfigFileNotFound(PathBuf),

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
