//! A session that several threads may drive.

use crate::engine::GtpEngine;
use crate::error::GtpError;
use std::sync::{Arc, Mutex};
use strictly_go::GoGame;
use tracing::{error, instrument};

/// Engine session behind one lock.
///
/// GTP has no command ids, so interleaved commands from two threads would
/// pair responses with the wrong requests. Every closure passed to
/// [`SharedEngine::with_engine`] runs while holding the lock, so a whole
/// operation (for instance an undo that replays the game) is never
/// interleaved with another.
#[derive(Debug)]
pub struct SharedEngine<T, G = GoGame> {
    inner: Arc<Mutex<GtpEngine<T, G>>>,
}

impl<T, G> Clone for SharedEngine<T, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, G> SharedEngine<T, G> {
    /// Wraps an engine session.
    pub fn new(engine: GtpEngine<T, G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    #[instrument(skip_all)]
    pub fn with_engine<R>(
        &self,
        f: impl FnOnce(&mut GtpEngine<T, G>) -> Result<R, GtpError>,
    ) -> Result<R, GtpError> {
        let mut guard = self.inner.lock().map_err(|_| {
            error!("Engine lock poisoned");
            GtpError::Poisoned
        })?;
        f(&mut guard)
    }
}
