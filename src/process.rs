//! Transport over the standard streams of a child process.

use crate::transport::{Transport, TransportError};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, instrument, warn};

/// A GTP engine running as a child process.
///
/// Commands are written to the engine's stdin one line at a time; a response
/// is every line up to the empty line that terminates it. The process is
/// killed when the transport is dropped.
#[derive(Debug)]
pub struct ProcessTransport {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessTransport {
    /// Spawns `program` with `args`, optionally inside `cwd`.
    #[instrument(skip(args, cwd), fields(program = %program))]
    pub fn spawn(
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<Self, TransportError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .map_err(|e| TransportError::new(format!("Failed to start {}: {}", program, e)))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| TransportError::new("Engine stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| TransportError::new("Engine stdout not captured"))?;

        debug!(pid = child.id(), "Engine process started");
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

/// Reads one GTP response: every non-blank line up to the blank line that
/// ends it.
fn read_response(reader: &mut impl BufRead) -> Result<String, TransportError> {
    let mut response = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(TransportError::new("Engine closed its output"));
        }
        let blank = line.trim().is_empty();
        // Blank lines before the status marker are noise, not a terminator.
        if blank && !response.is_empty() {
            return Ok(response);
        }
        if !blank {
            response.push_str(&line);
        }
    }
}

impl Transport for ProcessTransport {
    fn send(&mut self, command: &str) -> Result<String, TransportError> {
        writeln!(self.stdin, "{}", command)?;
        self.stdin.flush()?;
        read_response(&mut self.stdout)
    }
}

impl Drop for ProcessTransport {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            warn!(error = %e, "Failed to stop engine process");
        }
        let _ = self.child.wait();
    }
}
