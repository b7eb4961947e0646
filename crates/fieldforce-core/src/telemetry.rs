//! Tracing subscriber setup for hosts embedding the FieldForce crates.

use tracing_subscriber::EnvFilter;

use crate::config::{FieldforceConfig, LogFormat};
use crate::error::CoreError;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Returns an error if a global
/// subscriber is already set.
pub fn init(config: &FieldforceConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let result = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
    };

    result.map_err(|e| CoreError::Tracing(e.to_string()))
}
