//! Tests for native undo, double undo and the replay fallback.

mod common;

use common::{MockEngine, model_moves};
use strictly_go::{Color, Point};
use strictly_gtp::{DoubleUndoGuard, GameSettings, GtpEngine, GtpError, Vertex};

fn start(mock: &MockEngine, handicap: u32, player: Color) -> GtpEngine<MockEngine> {
    GtpEngine::start(mock.clone(), &GameSettings::new(19, 6.5, handicap, player)).unwrap()
}

/// Player D4, engine Q16, player D16, engine Q4: the player is to move.
fn four_plies(mock: &MockEngine, engine: &mut GtpEngine<MockEngine>) {
    mock.queue_genmove("Q16");
    mock.queue_genmove("Q4");
    assert!(engine.play(Vertex::Point(Point::new(3, 15))).unwrap());
    engine.gen_move().unwrap();
    assert!(engine.play(Vertex::Point(Point::new(3, 3))).unwrap());
    engine.gen_move().unwrap();
}

#[test]
fn test_undo_at_root_does_nothing() {
    let mock = MockEngine::new();
    let mut engine = start(&mock, 0, Color::Black);
    mock.clear_log();

    assert!(!engine.undo(true).unwrap());
    assert!(!engine.undo(false).unwrap());
    assert!(mock.log().is_empty());
}

#[test]
fn test_undo_at_root_with_handicap_does_nothing() {
    let mock = MockEngine::new().without_undo();
    let mut engine = start(&mock, 4, Color::Black);
    mock.clear_log();

    assert!(!engine.undo(true).unwrap());
    assert!(mock.log().is_empty());
    assert_eq!(engine.game().board().count(Color::Black), 4);
}

#[test]
fn test_double_undo_takes_back_two_plies() {
    let mock = MockEngine::new();
    mock.queue_genmove("Q16");
    let mut engine = start(&mock, 0, Color::Black);
    engine.play(Vertex::Point(Point::new(3, 15))).unwrap();
    engine.gen_move().unwrap();
    mock.clear_log();

    assert!(engine.undo(true).unwrap());

    assert_eq!(mock.log(), vec!["undo", "undo"]);
    assert!(engine.game().moves_to_current().is_empty());
    assert!(mock.moves().is_empty());
    assert_eq!(engine.game().next_player(), Color::Black);
}

#[test]
fn test_single_undo_when_double_not_allowed() {
    let mock = MockEngine::new();
    let mut engine = start(&mock, 0, Color::Black);
    four_plies(&mock, &mut engine);
    mock.clear_log();

    assert!(engine.undo(false).unwrap());

    assert_eq!(mock.count("undo"), 1);
    assert_eq!(engine.game().moves_to_current().len(), 3);
    assert_eq!(mock.moves(), model_moves(engine.game()));
}

#[test]
fn test_single_undo_when_engine_is_to_move() {
    let mock = MockEngine::new();
    let mut engine = start(&mock, 0, Color::Black);
    engine.play(Vertex::Point(Point::new(3, 15))).unwrap();
    mock.clear_log();

    assert!(engine.undo(true).unwrap());

    assert_eq!(mock.count("undo"), 1);
    assert!(engine.game().moves_to_current().is_empty());
}

#[test]
fn test_two_plies_guard_needs_two_moves() {
    let mock = MockEngine::new();
    mock.queue_genmove("D4");
    let mut engine = start(&mock, 0, Color::White);
    engine.gen_move().unwrap();
    mock.clear_log();

    assert_eq!(engine.double_undo_guard(), DoubleUndoGuard::TwoPlies);
    assert!(engine.undo(true).unwrap());

    assert_eq!(mock.count("undo"), 1);
    assert!(engine.game().moves_to_current().is_empty());
}

#[test]
fn test_always_guard_tries_second_undo() {
    let mock = MockEngine::new();
    mock.queue_genmove("D4");
    let mut engine = start(&mock, 0, Color::White).with_double_undo_guard(DoubleUndoGuard::Always);
    engine.gen_move().unwrap();
    mock.clear_log();

    // The second undo is refused by the engine; one ply is still taken back.
    assert!(engine.undo(true).unwrap());

    assert_eq!(mock.count("undo"), 2);
    assert!(engine.game().moves_to_current().is_empty());
}

#[test]
fn test_other_undo_refusal_changes_nothing() {
    let mock = MockEngine::new().refusing_undo("engine busy");
    let mut engine = start(&mock, 0, Color::Black);
    four_plies(&mock, &mut engine);
    let before = model_moves(engine.game());
    mock.clear_log();

    assert!(!engine.undo(true).unwrap());

    assert_eq!(mock.log(), vec!["undo"]);
    assert_eq!(model_moves(engine.game()), before);
    assert_eq!(engine.game().moves_to_current().len(), 4);
}

#[test]
fn test_fake_undo_replays_remaining_moves() {
    let mock = MockEngine::new().without_undo();
    mock.queue_genmove("Q16");
    let mut engine = start(&mock, 0, Color::Black);
    engine.play(Vertex::Point(Point::new(3, 15))).unwrap();
    engine.gen_move().unwrap();
    engine.play(Vertex::Point(Point::new(3, 3))).unwrap();
    mock.clear_log();

    assert!(engine.undo(false).unwrap());

    assert_eq!(
        mock.log(),
        vec![
            "undo",
            "boardsize 19",
            "komi 6.5",
            "clear_board",
            "play black D4",
            "play white Q16",
        ]
    );
    assert_eq!(engine.game().moves_to_current().len(), 2);
    assert_eq!(mock.moves(), model_moves(engine.game()));
    assert_eq!(engine.player_color(), Color::Black);
}

#[test]
fn test_fake_undo_matches_native_undo() {
    for allow_double in [false, true] {
        let native = MockEngine::new();
        let mut native_engine = start(&native, 0, Color::Black);
        four_plies(&native, &mut native_engine);

        let fake = MockEngine::new().without_undo();
        let mut fake_engine = start(&fake, 0, Color::Black);
        four_plies(&fake, &mut fake_engine);

        assert!(native_engine.undo(allow_double).unwrap());
        assert!(fake_engine.undo(allow_double).unwrap());

        assert_eq!(native.moves(), fake.moves());
        assert_eq!(native_engine.game().board(), fake_engine.game().board());
        assert_eq!(
            model_moves(native_engine.game()),
            model_moves(fake_engine.game())
        );
        assert_eq!(fake.moves(), model_moves(fake_engine.game()));
    }
}

#[test]
fn test_fake_undo_keeps_handicap() {
    let mock = MockEngine::new().without_undo();
    mock.queue_genmove("K10");
    mock.queue_genmove("R3");
    let mut engine = start(&mock, 2, Color::Black);
    engine.gen_move().unwrap();
    engine.play(Vertex::Point(Point::new(2, 16))).unwrap();
    engine.gen_move().unwrap();

    assert!(engine.undo(true).unwrap());

    assert_eq!(mock.state().handicap_stones.len(), 2);
    assert_eq!(mock.moves(), vec!["white K10"]);
    assert_eq!(mock.moves(), model_moves(engine.game()));
    assert_eq!(engine.game().board().count(Color::Black), 2);
    assert_eq!(engine.game().next_player(), Color::Black);
}

#[test]
fn test_fake_undo_replay_failure_is_an_error() {
    let mock = MockEngine::new().without_undo();
    mock.queue_genmove("Q16");
    let mut engine = start(&mock, 0, Color::Black);
    engine.play(Vertex::Point(Point::new(3, 15))).unwrap();
    engine.gen_move().unwrap();
    engine.play(Vertex::Point(Point::new(3, 3))).unwrap();
    mock.refuse("Q16");

    let err = engine.undo(false).unwrap_err();
    assert!(matches!(err, GtpError::ReplayRejected { move_number: 2, .. }));
}
