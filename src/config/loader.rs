// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{JobConfig, RawJobConfig};
use crate::errors::Result;

/// Load a job file from a given path and return the raw `RawJobConfig`.
///
/// This only performs TOML deserialization (which already rejects unknown
/// keys and out-of-set flag values); it does **not** check option ranges.
/// Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawJobConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading job file");
    let contents = fs::read_to_string(path)?;

    let config: RawJobConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a job file from path and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks frame ranges, increment and memory percentages.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<JobConfig> {
    let raw_config = load_from_path(&path)?;
    let config = JobConfig::try_from(raw_config)?;
    Ok(config)
}
