// src/config/validate.rs

use tracing::warn;

use crate::config::model::{JobConfig, RawJobConfig};
use crate::errors::{AerenderError, Result};
use crate::options::RenderOptions;

impl TryFrom<RawJobConfig> for JobConfig {
    type Error = crate::errors::AerenderError;

    fn try_from(raw: RawJobConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(JobConfig::new_unchecked(raw.exe, raw.render))
    }
}

fn validate_raw_config(cfg: &RawJobConfig) -> Result<()> {
    validate_exe(cfg)?;
    validate_render_options(&cfg.render)?;
    Ok(())
}

fn validate_exe(cfg: &RawJobConfig) -> Result<()> {
    if let Some(exe) = &cfg.exe {
        if exe.as_os_str().is_empty() {
            return Err(AerenderError::ConfigError(
                "`exe` must not be empty when given".to_string(),
            ));
        }
    }
    Ok(())
}

/// Check option values aerender would reject or misinterpret.
///
/// Flag enums are already closed by their types, so this only covers the
/// numeric options. Setting just one memory percentage is not an error: the
/// `-mem_usage` flag is simply left out.
pub fn validate_render_options(opts: &RenderOptions) -> Result<()> {
    validate_frames(opts)?;
    validate_memory(opts)?;
    Ok(())
}

fn validate_frames(opts: &RenderOptions) -> Result<()> {
    if let (Some(start), Some(end)) = (opts.start_frame, opts.end_frame) {
        if start > end {
            return Err(AerenderError::InvalidOption(format!(
                "start_frame ({start}) is after end_frame ({end})"
            )));
        }
    }

    if opts.increment == Some(0) {
        return Err(AerenderError::InvalidOption(
            "increment must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_memory(opts: &RenderOptions) -> Result<()> {
    for (name, value) in [
        ("image_cache_percent", opts.image_cache_percent),
        ("max_mem_percent", opts.max_mem_percent),
    ] {
        if let Some(percent) = value {
            if !(1..=100).contains(&percent) {
                return Err(AerenderError::InvalidOption(format!(
                    "{name} must be between 1 and 100 (got {percent})"
                )));
            }
        }
    }

    if opts.image_cache_percent.is_some() != opts.max_mem_percent.is_some() {
        warn!(
            image_cache_percent = ?opts.image_cache_percent,
            max_mem_percent = ?opts.max_mem_percent,
            "only one memory percentage given; -mem_usage needs both and will be omitted"
        );
    }

    Ok(())
}
