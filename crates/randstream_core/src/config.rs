//! Generator configuration.
//!
//! A [`GeneratorConfig`] describes how to construct a
//! [`RandomGenerator`](crate::RandomGenerator): an optional explicit seed
//! (system entropy otherwise) and the three scales. It can be built in code
//! with [`GeneratorConfigBuilder`] or loaded from TOML:
//!
//! ```toml
//! seed = [1, 2, 3, 4, 5, 6, 7, 8]
//! scale = 16
//! secondary_scale = 4
//! tertiary_scale = 3
//! ```
//!
//! Omitted keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::generator::{DEFAULT_SCALE, DEFAULT_SECONDARY_SCALE, DEFAULT_TERTIARY_SCALE};
use crate::source::SEED_SIZE;

/// Construction parameters for a generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Explicit seed words; `None` seeds from system entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Vec<i32>>,
    /// Primary scale.
    pub scale: i32,
    /// Secondary scale.
    pub secondary_scale: i32,
    /// Tertiary scale.
    pub tertiary_scale: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scale: DEFAULT_SCALE,
            secondary_scale: DEFAULT_SECONDARY_SCALE,
            tertiary_scale: DEFAULT_TERTIARY_SCALE,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::builder()
    ///     .seed(vec![0; 8])
    ///     .scale(10)
    ///     .build()
    ///     .expect("valid configuration");
    /// assert_eq!(config.scale, 10);
    /// assert_eq!(config.secondary_scale, 8);
    /// ```
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the text is not valid TOML for
    /// this structure, or the validation error.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)
            .map_err(|e| GeneratorError::Config(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the file cannot be read or
    /// parsed, or the validation error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialises the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| GeneratorError::Config(format!("Failed to serialise TOML: {e}")))
    }

    /// Validates the configuration.
    ///
    /// Scales are unrestricted here; each distribution checks the scale it
    /// uses when its sequence is created.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSeed`] if a seed is present and does
    /// not have exactly [`SEED_SIZE`] words.
    pub fn validate(&self) -> Result<()> {
        if let Some(seed) = &self.seed {
            if seed.len() != SEED_SIZE {
                return Err(GeneratorError::InvalidSeed {
                    expected: SEED_SIZE,
                    got: seed.len(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<Vec<i32>>,
    scale: Option<i32>,
    secondary_scale: Option<i32>,
    tertiary_scale: Option<i32>,
}

impl GeneratorConfigBuilder {
    /// Sets explicit seed words.
    #[inline]
    pub fn seed(mut self, seed: Vec<i32>) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the primary scale.
    #[inline]
    pub fn scale(mut self, scale: i32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the secondary scale.
    #[inline]
    pub fn secondary_scale(mut self, secondary_scale: i32) -> Self {
        self.secondary_scale = Some(secondary_scale);
        self
    }

    /// Sets the tertiary scale.
    #[inline]
    pub fn tertiary_scale(mut self, tertiary_scale: i32) -> Self {
        self.tertiary_scale = Some(tertiary_scale);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig {
            seed: self.seed,
            scale: self.scale.unwrap_or(DEFAULT_SCALE),
            secondary_scale: self.secondary_scale.unwrap_or(DEFAULT_SECONDARY_SCALE),
            tertiary_scale: self.tertiary_scale.unwrap_or(DEFAULT_TERTIARY_SCALE),
        };
        config.validate()?;
        Ok(config)
    }
}
