mod atomic;
mod settings;

pub use atomic::write_bytes_atomic;
pub use settings::{LogFormat, Settings, load_settings};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid path: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
