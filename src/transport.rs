//! The capability of delivering one command to an engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Sends one GTP command and blocks until its full response is available.
///
/// Implementations own response framing; the returned string is the whole
/// response (status marker included). Only failures of the channel itself
/// (closed pipe, dead process) are reported as errors; a `?` response is an
/// ordinary `Ok`.
pub trait Transport {
    /// Sends `command` (without trailing newline) and returns the response.
    fn send(&mut self, command: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, command: &str) -> Result<String, TransportError> {
        (**self).send(command)
    }
}

/// Transport failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TransportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
