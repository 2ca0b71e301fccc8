// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running aerender command lines,
//! using `tokio::process::Command`, and for recognising failures in what the
//! tool prints.
//!
//! - [`classify`] maps a single output line to a `RenderError`, if any.
//! - [`process_runner`] spawns the process, scans stdout, drains stderr and
//!   waits for exit.
//! - [`backend`] provides the `CommandRunner` trait and the concrete
//!   `ShellRunner` used in production, which tests can replace with a fake.

pub mod backend;
pub mod classify;
pub mod process_runner;

pub use backend::{CommandRunner, ShellRunner};
pub use classify::classify_line;
pub use process_runner::{OUTPUT_GRACE, run_command, scan_output};
