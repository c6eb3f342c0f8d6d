use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ProcessingError, Result};

/// Install the global subscriber. `RUST_LOG` wins over `level`; `verbose`
/// raises the crate's level to debug.
pub fn init_logging(level: &str, verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { level };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("warn,state_weather={}", level)).map_err(|e| {
            ProcessingError::Config(format!("Invalid log level '{}': {}", level, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}
