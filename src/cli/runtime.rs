//! Shared command plumbing
//!
//! Resolves configuration, loads the index once and renders JSON output.

use crate::cli::Cli;
use crate::config::{resolve_config, PatientIndexConfig};
use crate::core::PatientIndex;
use crate::domain::Result;
use serde::Serialize;
use std::sync::Arc;

/// Configuration plus the loaded index, ready to answer queries
#[derive(Debug, Clone)]
pub struct Runtime {
    /// Effective configuration (file, environment and CLI overrides applied)
    pub config: PatientIndexConfig,
    /// The shared, read-only index
    pub index: Arc<PatientIndex>,
}

/// Resolves the effective configuration for a CLI invocation
///
/// `--data` takes precedence over the configured data path.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded or is invalid.
pub fn resolve(cli: &Cli) -> Result<PatientIndexConfig> {
    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(ref data) = cli.data {
        config.data.path = data.clone();
    }
    Ok(config)
}

/// Resolves configuration and loads the index
///
/// # Errors
///
/// Returns a configuration error or a data load error.
pub fn open(cli: &Cli) -> Result<Runtime> {
    let config = resolve(cli)?;
    let index = PatientIndex::load(&config.data.path)?
        .with_recent_window(config.appointments.recent_window());

    Ok(Runtime {
        config,
        index: Arc::new(index),
    })
}

/// Renders a value as JSON
///
/// # Errors
///
/// Returns a serialization error if the value cannot be rendered.
pub fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
