//! Core configuration traits

use crate::TombolaError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "TOMBOLA_";

/// Core trait for Tombola configuration types
///
/// Configuration is layered: defaults, then an optional file, then
/// `TOMBOLA_*` environment variables, then explicit `key=value` overrides.
/// Validation runs once after all layers are applied.
pub trait TombolaConfig: Clone + Default + DeserializeOwned + Send + Sync + 'static {
    /// Load configuration from a TOML or JSON file, chosen by extension
    fn load_from_file(path: &Path) -> Result<Self, TombolaError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TombolaError::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| TombolaError::config(format!("Invalid TOML: {e}"))),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| TombolaError::config(format!("Invalid JSON: {e}"))),
            _ => Err(TombolaError::config(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }

    /// Merge with `TOMBOLA_*` variables from the process environment
    fn merge_with_env(&mut self) -> Result<(), TombolaError> {
        self.merge_with_vars(std::env::vars())
    }

    /// Merge with an explicit set of environment-style variables
    ///
    /// Keys without the `TOMBOLA_` prefix are ignored. `TOMBOLA_AVOID_COUNT`
    /// maps to the `avoid-count` key of [`TombolaConfig::set_from_string`].
    fn merge_with_vars<I>(&mut self, vars: I) -> Result<(), TombolaError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(suffix) = key.strip_prefix(ENV_PREFIX) {
                let config_key = suffix.to_lowercase().replace('_', "-");
                if self.accepts_key(&config_key) {
                    self.set_from_string(&config_key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Whether `key` names a setting understood by [`TombolaConfig::set_from_string`]
    fn accepts_key(&self, key: &str) -> bool;

    /// Set a configuration value from a string (for CLI and env parsing)
    fn set_from_string(&mut self, key: &str, value: &str) -> Result<(), TombolaError>;

    /// Validate the configuration
    fn validate(&self) -> Result<(), TombolaError>;

    /// Build a validated configuration from all layers
    ///
    /// `overrides` are `(key, value)` pairs for
    /// [`TombolaConfig::set_from_string`], applied after the environment.
    fn load_layered<I, K, V>(path: Option<&Path>, overrides: I) -> Result<Self, TombolaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        for (key, value) in overrides {
            config.set_from_string(key.as_ref().trim(), value.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse a configuration value, naming the key on failure
pub fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, TombolaError> {
    value
        .trim()
        .parse()
        .map_err(|_| TombolaError::config(format!("Invalid value for {key}: {value:?}")))
}
