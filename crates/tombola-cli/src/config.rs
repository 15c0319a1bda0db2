// Configuration loading for the CLI

use anyhow::Context;
use std::path::Path;
use tombola_core::{SessionConfig, TombolaConfig};

/// Build the effective configuration: file (or defaults), then `TOMBOLA_*`
/// environment variables, then `--set key=value` overrides.
pub fn load(path: Option<&Path>, overrides: &[String]) -> anyhow::Result<SessionConfig> {
    let pairs = overrides
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .with_context(|| format!("override {entry:?} is not KEY=VALUE"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = SessionConfig::load_layered(path, pairs).with_context(|| match path {
        Some(path) => format!("loading configuration from {}", path.display()),
        None => "loading configuration".to_string(),
    })?;
    Ok(config)
}
