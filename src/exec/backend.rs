// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! [`AerenderWrapper`](crate::wrapper::AerenderWrapper) talks to a
//! `CommandRunner` instead of spawning processes directly. This makes it easy
//! to swap in a fake runner in tests while keeping the production
//! implementation in [`process_runner`](super::process_runner).

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::process_runner::run_command;

/// Trait abstracting how a built command line is executed.
///
/// Production code uses [`ShellRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send + Sync {
    /// Execute `command` to completion.
    ///
    /// Implementations must only resolve once the command has finished, and
    /// must surface failures reported in the command's output as
    /// [`RenderError`](crate::errors::RenderError)s.
    fn run(&self, command: String) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real runner used in production: the command goes through the platform
/// shell via [`run_command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: String) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move { run_command(&command).await })
    }
}
