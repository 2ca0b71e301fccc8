// src/exec/process_runner.rs

//! Process Runner: spawn one aerender command, stream its output, and turn
//! recognised failure lines into [`RenderError`]s.
//!
//! Three pieces of work run per invocation:
//! - the **process-wait task** owns the child and awaits its exit,
//! - the **stderr drain** logs stderr at debug so the pipe never fills up,
//! - the calling task scans stdout.
//!
//! An error detected on stdout is only returned once the process has exited,
//! so callers never have to clean up a child after catching one. Once the
//! process has exited, output readers get [`OUTPUT_GRACE`] to reach EOF; a
//! background descendant that inherited the pipes cannot hold the result
//! back any longer than that.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, anyhow};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, error, info, warn};

use crate::errors::{AerenderError, RenderError, Result};
use crate::exec::classify::classify_line;

/// How long stdout and stderr may stay open after the process has exited.
pub const OUTPUT_GRACE: Duration = Duration::from_millis(500);

/// Run `command` through the platform shell and wait for it to finish.
///
/// Returns `Ok(())` when the process exits without printing any recognised
/// error line, regardless of its exit code. Returns the first
/// [`RenderError`] seen on stdout otherwise, after the process has exited.
pub async fn run_command(command: &str) -> Result<()> {
    info!(cmd = %command, "starting aerender process");

    let mut cmd = shell_command(command);
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for command {command:?}"))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout of aerender process was not captured"))?;
    let stderr = child.stderr.take();

    let mut process_task = tokio::spawn(async move { child.wait().await });

    // stderr is logged but never classified.
    let stderr_task = stderr.map(|stderr| {
        tokio::spawn(async move {
            if let Err(e) = drain_output(BufReader::new(stderr), "stderr").await {
                debug!(error = %e, "stopped reading stderr");
            }
        })
    });

    let mut detected: Option<RenderError> = None;
    let (scanned, joined, deadline) = {
        let scan = scan_into(BufReader::new(stdout), "stdout", &mut detected);
        tokio::pin!(scan);

        tokio::select! {
            scanned = &mut scan => {
                let joined = process_task.await;
                (Some(scanned), joined, Instant::now() + OUTPUT_GRACE)
            }
            joined = &mut process_task => {
                let deadline = Instant::now() + OUTPUT_GRACE;
                let scanned = timeout_at(deadline, &mut scan).await.ok();
                if scanned.is_none() {
                    warn!(
                        grace_ms = OUTPUT_GRACE.as_millis() as u64,
                        "aerender exited but its stdout is still open; stopped reading it"
                    );
                }
                (scanned, joined, deadline)
            }
        }
    };

    let waited = joined
        .context("joining aerender process task")
        .and_then(|status| status.context("waiting for aerender process"));

    if let Some(mut task) = stderr_task {
        match timeout_at(deadline, &mut task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(error = %e, "stderr drain task ended abnormally"),
            Err(_) => {
                task.abort();
                debug!("aerender exited but its stderr is still open; stopped reading it");
            }
        }
    }

    if let Some(render_error) = detected {
        match waited {
            Ok(status) => info!(
                exit_code = status.code().unwrap_or(-1),
                error = %render_error,
                "aerender process exited after reporting an error"
            ),
            Err(e) => warn!(error = %e, "failed to confirm aerender process exit"),
        }
        return Err(AerenderError::Render(render_error));
    }

    if let Some(Err(read_err)) = scanned {
        if let Err(e) = waited {
            warn!(error = %e, "failed to confirm aerender process exit");
        }
        return Err(AerenderError::IoError(read_err));
    }

    let status = waited?;
    let code = status.code().unwrap_or(-1);
    if status.success() {
        info!(cmd = %command, exit_code = code, "aerender process exited");
    } else {
        warn!(
            cmd = %command,
            exit_code = code,
            "aerender process exited unsuccessfully without reporting a known error"
        );
    }

    Ok(())
}

/// Read `reader` to the end, logging every line and classifying it.
///
/// The first classified line is kept and returned; later lines are still
/// read and logged (so the writer never blocks on a full pipe) but no longer
/// classified.
pub async fn scan_output<R>(reader: R, stream: &'static str) -> io::Result<Option<RenderError>>
where
    R: AsyncBufRead + Unpin,
{
    let mut detected = None;
    scan_into(reader, stream, &mut detected).await?;
    Ok(detected)
}

/// Like [`scan_output`], but records the first error in `detected` as soon
/// as it is seen, so the caller keeps it even if reading is cut short.
async fn scan_into<R>(
    reader: R,
    stream: &'static str,
    detected: &mut Option<RenderError>,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    for_each_line(reader, |line| {
        info!(stream, "{line}");

        if detected.is_none() {
            if let Some(err) = classify_line(line) {
                error!(
                    error = %err,
                    "waiting for aerender process to finish due to error"
                );
                *detected = Some(err);
            }
        }
    })
    .await
}

async fn drain_output<R>(reader: R, stream: &'static str) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    for_each_line(reader, |line| debug!(stream, "{line}")).await
}

/// Feed every line of `reader` to `f`, decoded lossily and stripped.
///
/// aerender on Windows writes in the console code page, so invalid UTF-8
/// must not end the stream.
async fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let decoded = String::from_utf8_lossy(&buf);
        f(decoded.trim());
    }
}

/// Build a shell command appropriate for the platform.
#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // `/S` makes cmd strip exactly the outer pair of quotes, leaving the
    // quoted executable path at the start of the line intact.
    let mut c = std::process::Command::new("cmd");
    c.raw_arg(format!("/S /C \"{command}\""));
    Command::from(c)
}

/// Build a shell command appropriate for the platform.
#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(command);
    c
}
