//! Layered settings: built-in defaults, then an optional TOML file, then
//! `STATE_WEATHER_*` environment variables (`__` separates nested keys,
//! e.g. `STATE_WEATHER_DATA__WEATHER_CSV`).

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_WEATHER_FILE, ENV_PREFIX,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Station-day weather table
    pub weather_csv: PathBuf,

    /// Region catalog (`code,name,fips`); the built-in U.S. catalog when unset
    pub catalog_csv: Option<PathBuf>,

    pub delimiter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    /// Load settings. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .set_default("data.weather_csv", DEFAULT_WEATHER_FILE)?
            .set_default("data.delimiter", ",")?
            .set_default("output.directory", DEFAULT_OUTPUT_DIR)?
            .set_default("output.pretty", false)?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// The configured delimiter as a single ASCII byte
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.data.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ProcessingError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.data.delimiter
            ))),
        }
    }
}
