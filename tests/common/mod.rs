//! Scriptable in-memory GTP engine shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use strictly_gtp::{Transport, TransportError};

/// Fixed handicap points for 19x19, in placement order.
pub const HANDICAP_19: [&str; 9] = ["D4", "Q16", "D16", "Q4", "D10", "Q10", "K4", "K16", "K10"];

/// What the fake engine believes about its own board.
#[derive(Debug, Default)]
pub struct MockState {
    /// Every command received, in order.
    pub log: Vec<String>,
    /// Largest handicap the engine accepts.
    pub max_handicap: u32,
    /// Whether `undo` is implemented.
    pub native_undo: bool,
    /// Refuses `undo` with this message instead of performing it.
    pub undo_refusal: Option<String>,
    /// Board size set with `boardsize`.
    pub size: usize,
    /// Handicap stones currently on the board.
    pub handicap_stones: Vec<String>,
    /// Moves played since the last `clear_board`, as `(color, vertex)`.
    pub moves: Vec<(String, String)>,
    /// Vertices that `play` refuses.
    pub illegal: HashSet<String>,
    /// Queued answers to `genmove`; an entry starting with `?` is a refusal.
    pub genmove: VecDeque<String>,
    /// Answers to `final_status_list <category>`.
    pub final_status: HashMap<String, String>,
    /// Answer to `final_score`; refused when unset.
    pub final_score: Option<String>,
    /// Makes the next `send` fail at the transport level.
    pub broken: bool,
}

/// Model moves in the same `"color VERTEX"` form as [`MockEngine::moves`].
pub fn model_moves(game: &strictly_go::GoGame) -> Vec<String> {
    game.moves_to_current()
        .iter()
        .map(|mv| {
            let vertex = match mv.kind {
                strictly_go::MoveKind::Place(p) => strictly_gtp::encode(p.into(), game.size()),
                strictly_go::MoveKind::Pass => "PASS".to_string(),
            };
            format!("{} {}", mv.color, vertex)
        })
        .collect()
}

/// Handle to a fake engine. Clones share state, so a test can keep one while
/// the session owns the other.
#[derive(Debug, Clone)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                max_handicap: 9,
                native_undo: true,
                size: 19,
                ..MockState::default()
            })),
        }
    }

    pub fn with_max_handicap(self, max: u32) -> Self {
        self.state().max_handicap = max;
        self
    }

    pub fn refusing_undo(self, message: &str) -> Self {
        self.state().undo_refusal = Some(message.to_string());
        self
    }

    pub fn without_undo(self) -> Self {
        self.state().native_undo = false;
        self
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn log(&self) -> Vec<String> {
        self.state().log.clone()
    }

    pub fn clear_log(&self) {
        self.state().log.clear();
    }

    /// Commands received whose verb is `verb`.
    pub fn count(&self, verb: &str) -> usize {
        self.state()
            .log
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(verb))
            .count()
    }

    pub fn queue_genmove(&self, answer: &str) {
        self.state().genmove.push_back(answer.to_string());
    }

    pub fn refuse(&self, vertex: &str) {
        self.state().illegal.insert(vertex.to_string());
    }

    /// Moves on the engine board, as `"color vertex"` strings.
    pub fn moves(&self) -> Vec<String> {
        self.state()
            .moves
            .iter()
            .map(|(c, v)| format!("{c} {v}"))
            .collect()
    }
}

fn ok(body: &str) -> String {
    format!("= {body}\n\n")
}

fn fail(body: &str) -> String {
    format!("? {body}\n\n")
}

impl Transport for MockEngine {
    fn send(&mut self, command: &str) -> Result<String, TransportError> {
        let mut s = self.state();
        if s.broken {
            return Err(TransportError::new("engine went away"));
        }
        s.log.push(command.to_string());

        let mut words = command.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let reply = match verb {
            "boardsize" => {
                s.size = args[0].parse().unwrap();
                ok("")
            }
            "komi" | "level" => ok(""),
            "clear_board" => {
                s.moves.clear();
                s.handicap_stones.clear();
                ok("")
            }
            "fixed_handicap" => {
                let n: u32 = args[0].parse().unwrap();
                if n == 0 || n > s.max_handicap || !s.moves.is_empty() {
                    fail("invalid handicap")
                } else {
                    s.handicap_stones = HANDICAP_19[..n as usize]
                        .iter()
                        .map(|v| v.to_string())
                        .collect();
                    ok(&s.handicap_stones.join(" "))
                }
            }
            "play" => {
                let vertex = args[1].to_uppercase();
                if s.illegal.contains(&vertex) {
                    fail("illegal move")
                } else {
                    s.moves.push((args[0].to_string(), vertex));
                    ok("")
                }
            }
            "genmove" => {
                let answer = s.genmove.pop_front().unwrap_or_else(|| "pass".to_string());
                if let Some(reason) = answer.strip_prefix('?') {
                    fail(reason)
                } else {
                    if !answer.eq_ignore_ascii_case("resign") {
                        s.moves.push((args[0].to_string(), answer.to_uppercase()));
                    }
                    ok(&answer)
                }
            }
            "undo" if s.undo_refusal.is_some() => {
                fail(s.undo_refusal.as_deref().unwrap_or_default())
            }
            "undo" if !s.native_undo => fail("cannot undo"),
            "undo" => {
                if s.moves.pop().is_some() {
                    ok("")
                } else {
                    fail("cannot undo")
                }
            }
            "final_status_list" => {
                let answer = s.final_status.get(args[0]).cloned().unwrap_or_default();
                ok(&answer)
            }
            "final_score" => match &s.final_score {
                Some(score) => ok(score),
                None => fail("cannot score"),
            },
            "showboard" => ok("\n. . .\n. . .\n. . ."),
            "name" => ok("Mock"),
            "version" => ok("1.0"),
            _ => fail("unknown command"),
        };
        Ok(reply)
    }
}
