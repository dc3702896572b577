//! Loading [`RosterOptions`] from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roster_model::RosterOptions;
use tracing::debug;

/// Read options from `path`, or return the defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<RosterOptions> {
    let Some(path) = path else {
        return Ok(RosterOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options =
        parse_options(&text).with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), ?options, "loaded config");
    Ok(options)
}

/// Parse options from TOML text. Missing keys take their defaults.
pub fn parse_options(text: &str) -> Result<RosterOptions> {
    let options: RosterOptions = toml::from_str(text)?;
    options.validate()?;
    Ok(options)
}
