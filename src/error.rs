use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvfigError {
    #[error("config name not set (call set_config_name first)")]
    ConfigNameNotSet,

    #[error("config file not found: {name}")]
    FileNotFound { name: String },

    #[error("unsupported config type: {0:?}")]
    UnsupportedConfigType(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for key '{key}': {source}")]
    Coercion {
        key: String,
        value: String,
        source: std::num::ParseIntError,
    },
}
