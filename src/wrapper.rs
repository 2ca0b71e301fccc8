// src/wrapper.rs

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::command::build_command;
use crate::errors::Result;
use crate::exec::{CommandRunner, ShellRunner};
use crate::options::RenderOptions;

/// Entry point for driving one aerender executable.
///
/// Holds the path to `aerender` (or `aerender.exe`) and the runner used to
/// execute built commands. Each call to [`run`](Self::run) is independent:
/// one process, no shared state.
pub struct AerenderWrapper {
    exe_path: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl AerenderWrapper {
    /// Wrapper that runs commands through the platform shell.
    pub fn new(exe_path: impl Into<PathBuf>) -> Self {
        Self::with_runner(exe_path, ShellRunner)
    }

    /// Wrapper using a custom runner (e.g. a fake in tests).
    pub fn with_runner(exe_path: impl Into<PathBuf>, runner: impl CommandRunner + 'static) -> Self {
        Self {
            exe_path: exe_path.into(),
            runner: Box::new(runner),
        }
    }

    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// The exact command line [`run`](Self::run) would execute for `opts`.
    pub fn command(&self, opts: &RenderOptions) -> String {
        build_command(&self.exe_path, opts)
    }

    /// Render with `opts` and wait for aerender to exit.
    ///
    /// Fails with [`AerenderError::Render`](crate::errors::AerenderError::Render)
    /// when aerender reports a recognised error; the process has already
    /// exited by the time that error is returned.
    pub async fn run(&self, opts: &RenderOptions) -> Result<()> {
        let command = self.command(opts);
        info!(exe = %self.exe_path.display(), "running aerender");
        self.runner.run(command).await
    }

    /// Ask aerender to print its version. Nothing is rendered; the version
    /// shows up in the stdout log.
    pub async fn print_version(&self) -> Result<()> {
        let opts = RenderOptions {
            version: true,
            ..Default::default()
        };
        self.run(&opts).await
    }
}

impl fmt::Debug for AerenderWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AerenderWrapper")
            .field("exe_path", &self.exe_path)
            .finish_non_exhaustive()
    }
}
