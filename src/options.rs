// src/options.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::{CloseFlag, SoundFlag, VerboseFlag};

/// Everything that can be passed to a single aerender invocation.
///
/// All fields are optional; `RenderOptions::default()` means "pass nothing"
/// and lets aerender fall back to whatever the project defines. Build a value
/// with struct update syntax:
///
/// ```
/// use aerender::RenderOptions;
///
/// let opts = RenderOptions {
///     comp_name: Some("Main".into()),
///     output_path: Some("renders/main.mov".into()),
///     ..Default::default()
/// };
/// assert!(opts.project_path.is_none());
/// ```
///
/// The same fields make up the `[render]` table of a job file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Ask an already running After Effects instance to do the render
    /// instead of launching a new one.
    pub reuse: bool,

    /// Project file (path or URI) to open. Without it aerender uses the
    /// currently open project.
    pub project_path: Option<PathBuf>,

    /// Team project to open.
    pub project_name: Option<String>,

    /// Composition to render. Without `comp_name` (or an
    /// `index_in_render_queue`) aerender renders the whole render queue and
    /// ignores the template, output and frame options.
    pub comp_name: Option<String>,

    /// Render queue item to render.
    pub index_in_render_queue: Option<u32>,

    /// Render settings template to apply to the render queue item.
    pub render_settings_template: Option<String>,

    /// Output module template to apply.
    pub output_module_template: Option<String>,

    /// Destination render file (path or URI).
    pub output_path: Option<PathBuf>,

    /// Where aerender writes its log. Defaults to stdout, which is what the
    /// process runner classifies; redirecting it means errors go unnoticed.
    pub logfile_path: Option<PathBuf>,

    pub start_frame: Option<u32>,

    /// Last frame to render, inclusive.
    pub end_frame: Option<u32>,

    /// Frames to advance before rendering a new one. 1 renders every frame.
    pub increment: Option<u32>,

    /// Maximum percent of memory used to cache rendered images and footage.
    /// Only emitted together with `max_mem_percent`.
    pub image_cache_percent: Option<u32>,

    /// Total percent of memory After Effects may use.
    /// Only emitted together with `image_cache_percent`.
    pub max_mem_percent: Option<u32>,

    pub verbose_flag: Option<VerboseFlag>,
    pub close_flag: Option<CloseFlag>,
    pub sound_flag: Option<SoundFlag>,

    /// Log missing footage and render placeholder color bars instead of
    /// stopping.
    pub continue_on_missing_footage: bool,

    /// Only print aerender's version; nothing is rendered.
    pub version: bool,
}

impl RenderOptions {
    /// The `-mem_usage` pair, present only when both halves are set.
    pub fn memory_usage(&self) -> Option<(u32, u32)> {
        self.image_cache_percent.zip(self.max_mem_percent)
    }

    /// Combine two option sets: every field set in `overrides` wins, every
    /// field it leaves unset keeps the value from `self`. Boolean switches are
    /// on if either side turns them on.
    pub fn overlay(self, overrides: RenderOptions) -> RenderOptions {
        RenderOptions {
            reuse: self.reuse || overrides.reuse,
            project_path: overrides.project_path.or(self.project_path),
            project_name: overrides.project_name.or(self.project_name),
            comp_name: overrides.comp_name.or(self.comp_name),
            index_in_render_queue: overrides
                .index_in_render_queue
                .or(self.index_in_render_queue),
            render_settings_template: overrides
                .render_settings_template
                .or(self.render_settings_template),
            output_module_template: overrides
                .output_module_template
                .or(self.output_module_template),
            output_path: overrides.output_path.or(self.output_path),
            logfile_path: overrides.logfile_path.or(self.logfile_path),
            start_frame: overrides.start_frame.or(self.start_frame),
            end_frame: overrides.end_frame.or(self.end_frame),
            increment: overrides.increment.or(self.increment),
            image_cache_percent: overrides.image_cache_percent.or(self.image_cache_percent),
            max_mem_percent: overrides.max_mem_percent.or(self.max_mem_percent),
            verbose_flag: overrides.verbose_flag.or(self.verbose_flag),
            close_flag: overrides.close_flag.or(self.close_flag),
            sound_flag: overrides.sound_flag.or(self.sound_flag),
            continue_on_missing_footage: self.continue_on_missing_footage
                || overrides.continue_on_missing_footage,
            version: self.version || overrides.version,
        }
    }
}
