//! Errors surfaced by the protocol core.
//!
//! GTP-level refusals are not errors: they come back as `Ok(false)` or
//! `Ok(None)`. These variants cover the cases where the engine and the game
//! model can no longer be trusted to agree.

use crate::codec::Vertex;
use crate::transport::TransportError;
use derive_more::{Display, Error, From};
use strictly_go::{Move, MoveError};

/// Error from an engine session.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GtpError {
    /// The transport could not deliver a command or read its response.
    #[display("{_0}")]
    Transport(TransportError),

    /// The engine refused a move while replaying the game tree.
    #[display("Engine rejected replayed move {move_number} ({mv}): {response}")]
    #[from(ignore)]
    ReplayRejected {
        /// One-based index of the refused move.
        move_number: usize,
        /// The refused move.
        mv: Move,
        /// The engine's response body.
        response: String,
    },

    /// The engine placed a different number of handicap stones than the game records.
    #[display("Engine accepted handicap {accepted}, game records {expected}")]
    #[from(ignore)]
    HandicapMismatch {
        /// Handicap recorded in the game tree.
        expected: u32,
        /// Handicap the engine accepted.
        accepted: u32,
    },

    /// The game model refused a move the engine had already accepted.
    #[display("Game model rejected engine-accepted move at {vertex:?}: {source}")]
    #[from(ignore)]
    ModelRejected {
        /// The accepted vertex.
        vertex: Vertex,
        /// Why the model refused it.
        source: MoveError,
    },

    /// A thread panicked while holding the shared engine.
    #[display("Shared engine lock poisoned")]
    #[from(ignore)]
    Poisoned,
}
