// src/lib.rs

//! Async wrapper around Adobe After Effects' `aerender`.
//!
//! Build a command line from [`RenderOptions`], run it, and get a typed
//! [`RenderError`] back when aerender reports a failure:
//!
//! ```no_run
//! use aerender::{AerenderWrapper, RenderOptions};
//!
//! # async fn demo() -> aerender::errors::Result<()> {
//! let ae = AerenderWrapper::new("C:/Program Files/Adobe/Adobe After Effects 2024/Support Files/aerender.exe");
//! ae.run(&RenderOptions {
//!     project_path: Some("D:/jobs/promo.aep".into()),
//!     comp_name: Some("Main".into()),
//!     ..Default::default()
//! })
//! .await
//! # }
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod options;
pub mod types;
pub mod wrapper;

pub use command::build_command;
pub use errors::{AerenderError, ErrorKind, RenderError};
pub use options::RenderOptions;
pub use types::{CloseFlag, SoundFlag, VerboseFlag};
pub use wrapper::AerenderWrapper;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{JobConfig, load_and_validate, validate_render_options};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - job file loading (optional)
/// - command-line overrides
/// - executable resolution
/// - either printing the command (`--dry-run`) or running it
pub async fn run(args: CliArgs) -> Result<()> {
    let job = match &args.config {
        Some(path) => load_and_validate(path)
            .with_context(|| format!("loading job file {}", path.display()))?,
        None => JobConfig::new_unchecked(None, RenderOptions::default()),
    };

    let exe = args.exe.or(job.exe).ok_or_else(|| {
        AerenderError::ConfigError(
            "no aerender executable given; pass --exe, set AERENDER_PATH or set `exe` in the job file"
                .to_string(),
        )
    })?;

    let opts = job.render.overlay(args.render.into_options());
    validate_render_options(&opts)?;

    let wrapper = AerenderWrapper::new(exe);

    if args.dry_run {
        println!("{}", wrapper.command(&opts));
        debug!("dry-run complete (no execution)");
        return Ok(());
    }

    wrapper.run(&opts).await?;
    Ok(())
}
