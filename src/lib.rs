//! Strictly GTP - a Go Text Protocol client.
//!
//! Drives an external Go engine over GTP while keeping a local game tree in
//! lockstep with the engine's board.
//!
//! # Architecture
//!
//! - **Codec**: board points to GTP vertices and back
//! - **Transport**: one blocking command/response exchange (child process or any custom channel)
//! - **Engine**: session setup and handicap negotiation, moves, undo with replay fallback, scoring
//! - **Model**: the narrow interface to the game tree ([`strictly_go::GoGame`] by default)
//!
//! # Example
//!
//! ```no_run
//! use strictly_gtp::{EngineConfig, GtpEngine, Vertex};
//! use strictly_go::Point;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = EngineConfig::from_file("engine.toml")?;
//! let mut engine: GtpEngine<_> = GtpEngine::start(config.spawn()?, config.game())?;
//!
//! if engine.play(Vertex::Point(Point::new(3, 15)))? {
//!     let answer = engine.gen_move()?;
//!     println!("engine answered {answer:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod codec;
mod colors;
mod command;
mod config;
mod engine;
mod error;
mod model;
mod process;
mod response;
mod shared;
mod transport;

// Crate-level exports - Coordinates
pub use codec::{BOARD_LETTERS, MAX_BOARD_SIZE, Vertex, decode, encode};

// Crate-level exports - Protocol
pub use command::{Command, StatusCategory, format_komi};
pub use response::Response;

// Crate-level exports - Transport
pub use process::ProcessTransport;
pub use transport::{Transport, TransportError};

// Crate-level exports - Session
pub use colors::ColorSession;
pub use engine::{DoubleUndoGuard, GtpEngine};
pub use model::GameModel;
pub use shared::SharedEngine;

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, EngineConfig, GameSettings};
pub use error::GtpError;
