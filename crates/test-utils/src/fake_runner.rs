use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use aerender::errors::Result;
use aerender::exec::{CommandRunner, scan_output};

/// A fake runner that:
/// - records every command it was asked to run
/// - replays a fixed stdout through the real line scanner instead of
///   spawning a process.
pub struct ScriptedRunner {
    stdout: Vec<u8>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            stdout: Vec::new(),
            executed,
        }
    }

    /// Output the fake process "prints" on every run.
    pub fn with_stdout(mut self, lines: &[&str]) -> Self {
        for line in lines {
            self.stdout.extend_from_slice(line.as_bytes());
            self.stdout.push(b'\n');
        }
        self
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: String) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            {
                let mut guard = self.executed.lock().unwrap();
                guard.push(command);
            }

            match scan_output(self.stdout.as_slice(), "stdout").await? {
                Some(err) => Err(err.into()),
                None => Ok(()),
            }
        })
    }
}
