// src/command.rs

//! Command Builder: turns an executable path plus [`RenderOptions`] into the
//! single command line handed to the shell.
//!
//! Flags always come out in the order of [`FLAG_ORDER`], no matter which
//! options are set, so the same options always produce the same string.
//! Paths and names are wrapped in double quotes; numbers and enum flags are
//! emitted bare.

use std::path::Path;

use crate::options::RenderOptions;

/// Every flag the builder can emit, in the order it emits them.
pub const FLAG_ORDER: [&str; 18] = [
    "-reuse",
    "-project",
    "-teamproject",
    "-comp",
    "-rqindex",
    "-RStemplate",
    "-OMtemplate",
    "-output",
    "-log",
    "-s",
    "-e",
    "-i",
    "-mem_usage",
    "-v",
    "-close",
    "-sound",
    "-continueOnMissingFootage",
    "-version",
];

/// Build the full aerender command line for `opts`.
pub fn build_command(exe: &Path, opts: &RenderOptions) -> String {
    let mut parts = vec![quote(&native_path(exe))];

    if opts.reuse {
        parts.push("-reuse".to_string());
    }
    if let Some(path) = &opts.project_path {
        parts.push(format!("-project {}", quote(&native_path(path))));
    }
    if let Some(name) = &opts.project_name {
        parts.push(format!("-teamproject {}", quote(name)));
    }
    if let Some(name) = &opts.comp_name {
        parts.push(format!("-comp {}", quote(name)));
    }
    if let Some(index) = opts.index_in_render_queue {
        parts.push(format!("-rqindex {index}"));
    }
    if let Some(template) = &opts.render_settings_template {
        parts.push(format!("-RStemplate {}", quote(template)));
    }
    if let Some(template) = &opts.output_module_template {
        parts.push(format!("-OMtemplate {}", quote(template)));
    }
    if let Some(path) = &opts.output_path {
        parts.push(format!("-output {}", quote(&native_path(path))));
    }
    if let Some(path) = &opts.logfile_path {
        parts.push(format!("-log {}", quote(&native_path(path))));
    }
    if let Some(frame) = opts.start_frame {
        parts.push(format!("-s {frame}"));
    }
    if let Some(frame) = opts.end_frame {
        parts.push(format!("-e {frame}"));
    }
    if let Some(increment) = opts.increment {
        parts.push(format!("-i {increment}"));
    }
    if let Some((image_cache, max_mem)) = opts.memory_usage() {
        parts.push(format!("-mem_usage {image_cache} {max_mem}"));
    }
    if let Some(flag) = opts.verbose_flag {
        parts.push(format!("-v {flag}"));
    }
    if let Some(flag) = opts.close_flag {
        parts.push(format!("-close {flag}"));
    }
    if let Some(flag) = opts.sound_flag {
        parts.push(format!("-sound {flag}"));
    }
    if opts.continue_on_missing_footage {
        parts.push("-continueOnMissingFootage".to_string());
    }
    if opts.version {
        parts.push("-version".to_string());
    }

    parts.join(" ")
}

/// Wrap `value` in double quotes for the platform shell.
///
/// `sh` still expands `$`, backticks and backslashes inside double quotes,
/// so those (and `"` itself) are backslash-escaped there. `cmd` has no such
/// expansion inside quotes and `\` is the Windows path separator, so values
/// pass through untouched on Windows.
fn quote(value: &str) -> String {
    if cfg!(windows) {
        return format!("\"{value}\"");
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Render a path with the platform's own separator. aerender is a Windows
/// (and macOS) tool; on Windows `C:/a/b` must reach it as `C:\a\b`.
fn native_path(path: &Path) -> String {
    let rendered = path.display().to_string();
    if cfg!(windows) {
        rendered.replace('/', "\\")
    } else {
        rendered
    }
}
