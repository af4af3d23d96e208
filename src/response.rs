//! GTP response parsing.
//!
//! A response is a success iff its first character is `=`; a failure starts
//! with `?`. Everything after the marker (and the optional numeric command
//! id) is the body. Parsing is total: an empty string is simply a failure.

use crate::codec::{self, Vertex};

/// A parsed engine response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    success: bool,
    body: String,
}

impl Response {
    /// Parses a raw response as returned by the transport.
    pub fn parse(raw: &str) -> Self {
        let success = raw.starts_with('=');
        let body = match raw.chars().next() {
            Some('=' | '?') => raw[1..].trim_start_matches(|c: char| c.is_ascii_digit()),
            _ => raw,
        };
        Self {
            success,
            body: body.trim().to_string(),
        }
    }

    /// Returns true if the engine accepted the command.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Response text without the status marker, trimmed.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whitespace-separated tokens of the body.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.body.split_whitespace()
    }

    /// First token of the body, if any.
    pub fn first_token(&self) -> Option<&str> {
        self.tokens().next()
    }

    /// Every token of the body that decodes as a vertex; the rest are dropped.
    pub fn vertices(&self, board_size: usize) -> Vec<Vertex> {
        self.tokens()
            .filter_map(|token| {
                let vertex = codec::decode(token, board_size);
                if vertex.is_none() {
                    tracing::warn!(token, "Skipping undecodable vertex");
                }
                vertex
            })
            .collect()
    }

    /// Returns true if the failure text says the engine cannot undo.
    pub fn is_cannot_undo(&self) -> bool {
        !self.success && self.body.to_ascii_lowercase().contains("cannot undo")
    }
}
