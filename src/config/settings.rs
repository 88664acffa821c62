use crate::catalog::Category;
use crate::config::error::ConfigError;
use crate::convert::FallbackPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

/// Formatted results are rendered with `{:.N$}`; f64 carries ~15 significant digits
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    // Category selected when the form opens
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_precision() -> usize {
    2
}

/// Whether `precision` can be used for formatted results
pub fn precision_in_range(precision: usize) -> bool {
    precision <= MAX_PRECISION
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, otherwise `unitconv.toml` in the working
    /// directory if it exists, otherwise built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load_from_file(fallback)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !precision_in_range(self.display.precision) {
            return Err(ConfigError::Invalid(format!(
                "display.precision must be at most {}, got {}",
                MAX_PRECISION, self.display.precision
            )));
        }
        Ok(())
    }
}
