use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use reportforge_generate::GenerateOptions;

use super::{ConfigError, ConfigResult};

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "reportforge.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSettings {
    pub max_records: Option<u64>,
    pub seed: Option<u64>,
    pub default_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub generate: GenerateSettings,
}

impl Settings {
    /// Engine options with command-line values taking precedence.
    pub fn generate_options(&self, max_records: Option<u64>, seed: Option<u64>) -> GenerateOptions {
        GenerateOptions {
            max_records: max_records.or(self.generate.max_records),
            seed: seed.or(self.generate.seed),
        }
    }

    pub fn record_count(&self, count: Option<i64>) -> i64 {
        count.or(self.generate.default_count).unwrap_or(1)
    }
}

pub fn parse_settings(content: &str) -> ConfigResult<Settings> {
    Ok(toml::from_str(content)?)
}

/// Load settings from an explicit path, or from `reportforge.toml` when present.
pub fn load_settings(explicit: Option<&Path>) -> ConfigResult<Settings> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path,
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}
