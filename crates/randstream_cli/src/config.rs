//! Configuration loading for the CLI.

use crate::error::Result;
use randstream_core::GeneratorConfig;
use std::path::Path;
use tracing::{debug, info};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "randstream.toml";

/// Loads the generator configuration from `path`.
///
/// A missing file at the default path yields the default configuration; any
/// other missing or malformed file is an error.
pub fn load(path: &str) -> Result<GeneratorConfig> {
    if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
        debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        return Ok(GeneratorConfig::default());
    }
    info!("Loading configuration from {}", path);
    Ok(GeneratorConfig::from_file(path)?)
}

/// Applies command-line overrides and revalidates.
pub fn apply_overrides(
    mut config: GeneratorConfig,
    seed_words: Vec<i32>,
    scale: Option<i32>,
) -> Result<GeneratorConfig> {
    if !seed_words.is_empty() {
        config.seed = Some(seed_words);
    }
    if let Some(scale) = scale {
        config.scale = scale;
    }
    config.validate()?;
    Ok(config)
}
