//! Canned-list configuration loading.

use kaiwa_core::config::ConfigRoot;
use kaiwa_core::error::Result;
use kaiwa_core::responder::Responder;
use std::fs;
use std::path::Path;

/// Loads the configuration file at `path`.
///
/// A missing file yields the default (empty) configuration; a present but
/// unparseable file is an error.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigRoot> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ConfigRoot::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Builds the responder for the configuration at `path`.
///
/// Missing file or empty canned list both fall back to the built-in
/// entries.
pub fn load_responder(path: impl AsRef<Path>) -> Result<Responder> {
    Ok(load_config(path)?.into_responder())
}
