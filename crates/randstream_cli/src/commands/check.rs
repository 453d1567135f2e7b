//! Check command: validates and prints the effective configuration.

use crate::error::Result;
use randstream_core::{GeneratorConfig, RandomGenerator};
use tracing::info;

/// Validates `config`, builds a generator from it and prints the
/// configuration as TOML.
pub fn run(config: &GeneratorConfig) -> Result<()> {
    config.validate()?;
    let generator = RandomGenerator::from_config(config)?;
    info!(
        "Configuration valid (scale {}, secondary {}, tertiary {})",
        generator.scale(),
        generator.secondary_scale(),
        generator.tertiary_scale()
    );
    print!("{}", config.to_toml_string()?);
    if config.seed.is_none() {
        println!("# seed drawn from entropy: {:?}", generator.seed());
    }
    Ok(())
}
