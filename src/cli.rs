// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Render flags mirror aerender's own, spelled as long options. The enum
//! flags (`--verbose-flag`, `--close`, `--sound`) go through the same
//! `FromStr` rules as job files, so bad values stop at argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::options::RenderOptions;
use crate::types::{CloseFlag, SoundFlag, VerboseFlag};

/// Command-line arguments for `aerender-run`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aerender-run",
    version,
    about = "Run Adobe After Effects' aerender and fail on the errors it reports.",
    long_about = None
)]
pub struct CliArgs {
    /// Render job file (TOML). Command-line flags override its values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the aerender executable.
    ///
    /// Falls back to `AERENDER_PATH`, then to `exe` in the job file.
    #[arg(long, value_name = "PATH", env = "AERENDER_PATH")]
    pub exe: Option<PathBuf>,

    /// Print the aerender command line and exit without running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AERENDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Render options as command-line flags.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Reuse an already running After Effects instance.
    #[arg(long)]
    pub reuse: bool,

    /// Project file to open.
    #[arg(long = "project", value_name = "PATH")]
    pub project_path: Option<PathBuf>,

    /// Team project to open.
    #[arg(long = "teamproject", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Composition to render.
    #[arg(long = "comp", value_name = "NAME")]
    pub comp_name: Option<String>,

    /// Render queue item to render.
    #[arg(long = "rqindex", value_name = "INDEX")]
    pub index_in_render_queue: Option<u32>,

    /// Render settings template.
    #[arg(long = "rs-template", value_name = "NAME")]
    pub render_settings_template: Option<String>,

    /// Output module template.
    #[arg(long = "om-template", value_name = "NAME")]
    pub output_module_template: Option<String>,

    /// Destination render file.
    #[arg(long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Where aerender writes its own log (default: stdout).
    #[arg(long = "log-file", value_name = "PATH")]
    pub logfile_path: Option<PathBuf>,

    #[arg(long, value_name = "FRAME")]
    pub start_frame: Option<u32>,

    /// Last frame to render (inclusive).
    #[arg(long, value_name = "FRAME")]
    pub end_frame: Option<u32>,

    /// Frames to advance before rendering a new one.
    #[arg(long, value_name = "N")]
    pub increment: Option<u32>,

    /// Percent of memory for the image cache (needs --max-mem-percent).
    #[arg(long, value_name = "PERCENT")]
    pub image_cache_percent: Option<u32>,

    /// Percent of memory After Effects may use (needs --image-cache-percent).
    #[arg(long, value_name = "PERCENT")]
    pub max_mem_percent: Option<u32>,

    /// ERRORS or ERRORS_AND_PROGRESS.
    #[arg(long, value_name = "FLAG")]
    pub verbose_flag: Option<VerboseFlag>,

    /// DO_NOT_SAVE_CHANGES, SAVE_CHANGES or DO_NOT_CLOSE.
    #[arg(long = "close", value_name = "FLAG")]
    pub close_flag: Option<CloseFlag>,

    /// ON or OFF.
    #[arg(long = "sound", value_name = "FLAG")]
    pub sound_flag: Option<SoundFlag>,

    /// Render placeholder color bars for missing footage instead of stopping.
    #[arg(long)]
    pub continue_on_missing_footage: bool,

    /// Ask aerender for its version instead of rendering.
    #[arg(long = "ae-version")]
    pub print_version: bool,
}

impl RenderArgs {
    pub fn into_options(self) -> RenderOptions {
        RenderOptions {
            reuse: self.reuse,
            project_path: self.project_path,
            project_name: self.project_name,
            comp_name: self.comp_name,
            index_in_render_queue: self.index_in_render_queue,
            render_settings_template: self.render_settings_template,
            output_module_template: self.output_module_template,
            output_path: self.output_path,
            logfile_path: self.logfile_path,
            start_frame: self.start_frame,
            end_frame: self.end_frame,
            increment: self.increment,
            image_cache_percent: self.image_cache_percent,
            max_mem_percent: self.max_mem_percent,
            verbose_flag: self.verbose_flag,
            close_flag: self.close_flag,
            sound_flag: self.sound_flag,
            continue_on_missing_footage: self.continue_on_missing_footage,
            version: self.print_version,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
