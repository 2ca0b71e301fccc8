// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::options::RenderOptions;

/// Job file exactly as parsed from TOML, before validation.
///
/// Both keys are optional: the executable can also come from the command
/// line or `AERENDER_PATH`, and an empty `[render]` table is a valid (if
/// unusual) render of the whole queue of the open project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawJobConfig {
    /// Path to the aerender executable.
    #[serde(default)]
    pub exe: Option<PathBuf>,

    /// Options for the render, see [`RenderOptions`].
    #[serde(default)]
    pub render: RenderOptions,
}

/// A validated job file. Only obtainable through `TryFrom<RawJobConfig>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub exe: Option<PathBuf>,
    pub render: RenderOptions,
}

impl JobConfig {
    pub(crate) fn new_unchecked(exe: Option<PathBuf>, render: RenderOptions) -> Self {
        Self { exe, render }
    }
}
