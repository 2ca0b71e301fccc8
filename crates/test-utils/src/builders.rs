#![allow(dead_code)]

use std::path::{Path, PathBuf};

use aerender::RenderOptions;
use aerender::config::{JobConfig, RawJobConfig};

/// Executable path used by the golden command-line test.
pub fn golden_exe() -> PathBuf {
    PathBuf::from("C:/Program Files/Adobe/Adobe After Effects CC 2019/Support Files/aerender.exe")
}

/// Option set used by the golden command-line test.
pub fn golden_options() -> RenderOptions {
    RenderOptions {
        project_path: Some(PathBuf::from("C:/Program Files/adobe/Desktop/project")),
        comp_name: Some("Composition name".to_string()),
        output_module_template: Some("output template".to_string()),
        output_path: Some(PathBuf::from("C:/Program Files/adobe/Desktop/movie.mov")),
        ..Default::default()
    }
}

/// Builder for `JobConfig` to simplify test setup.
pub struct JobConfigBuilder {
    config: RawJobConfig,
}

impl JobConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawJobConfig::default(),
        }
    }

    pub fn with_exe(mut self, exe: impl Into<PathBuf>) -> Self {
        self.config.exe = Some(exe.into());
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.config.render = render;
        self
    }

    pub fn build(self) -> JobConfig {
        JobConfig::try_from(self.config).expect("Failed to build valid job config from builder")
    }
}

impl Default for JobConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for small POSIX `sh` scripts that imitate aerender output.
///
/// Each step becomes one `;`-separated shell statement, so the built string
/// can be handed straight to `run_command` on Unix.
pub struct ShellScriptBuilder {
    steps: Vec<String>,
}

impl ShellScriptBuilder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Print `line` on stdout.
    pub fn stdout(mut self, line: &str) -> Self {
        self.steps.push(format!("printf '%s\\n' {}", sh_quote(line)));
        self
    }

    /// Print `line` on stderr.
    pub fn stderr(mut self, line: &str) -> Self {
        self.steps.push(format!("printf '%s\\n' {} >&2", sh_quote(line)));
        self
    }

    /// Print `line` on stdout `times` times, using a shell loop so the
    /// script itself stays short.
    pub fn repeat_stdout(mut self, line: &str, times: u32) -> Self {
        self.steps.push(format!(
            "i=0; while [ $i -lt {times} ]; do printf '%s\\n' {}; i=$((i+1)); done",
            sh_quote(line)
        ));
        self
    }

    pub fn sleep_ms(mut self, ms: u64) -> Self {
        self.steps.push(format!("sleep {}.{:03}", ms / 1000, ms % 1000));
        self
    }

    /// Leave a background process behind that holds the inherited stdout
    /// and stderr open for `ms` after the script itself has exited.
    pub fn background_sleep_ms(mut self, ms: u64) -> Self {
        self.steps
            .push(format!("(sleep {}.{:03} &)", ms / 1000, ms % 1000));
        self
    }

    /// Create an empty file at `path`, e.g. to prove the script got this far.
    pub fn touch(mut self, path: &Path) -> Self {
        self.steps
            .push(format!("touch {}", sh_quote(&path.display().to_string())));
        self
    }

    pub fn exit(mut self, code: i32) -> Self {
        self.steps.push(format!("exit {code}"));
        self
    }

    pub fn build(self) -> String {
        if self.steps.is_empty() {
            return "true".to_string();
        }
        self.steps.join("; ")
    }
}

impl Default for ShellScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-quote `s` for `sh`, including embedded single quotes.
fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
