//! Interactive terminal game against a GTP engine.

use anyhow::{Context, Result};
use strictly_go::{GoGame, MoveKind};
use strictly_gtp::{
    BOARD_LETTERS, EngineConfig, GtpEngine, GtpError, ProcessTransport, SharedEngine, Transport,
    Vertex, decode,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

type Session = SharedEngine<ProcessTransport, GoGame>;

/// What the user typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Move(String),
    Undo,
    Swap,
    Board,
    Score,
    Help,
    Quit,
    Empty,
}

impl Input {
    fn parse(line: &str) -> Self {
        let word = line.trim();
        match word.to_ascii_lowercase().as_str() {
            "" => Input::Empty,
            "undo" | "u" => Input::Undo,
            "swap" => Input::Swap,
            "board" | "showboard" => Input::Board,
            "score" => Input::Score,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            _ => Input::Move(word.to_string()),
        }
    }
}

const HELP: &str = "Commands: a vertex such as D4, pass, undo, swap, board, score, quit";

/// Runs a session on Tokio's blocking pool; GTP calls block until the engine answers.
async fn blocking<R, F>(session: &Session, f: F) -> Result<R>
where
    R: Send + 'static,
    F: FnOnce(&mut GtpEngine<ProcessTransport, GoGame>) -> Result<R, GtpError> + Send + 'static,
{
    let session = session.clone();
    let result = tokio::task::spawn_blocking(move || session.with_engine(f))
        .await
        .context("Engine task panicked")?;
    Ok(result?)
}

/// Prints the model's board with GTP coordinates.
fn render(game: &GoGame) -> String {
    let board = game.board().display();
    let size = game.size();
    let letters: String = BOARD_LETTERS
        .chars()
        .take(size)
        .map(|c| format!("{c} "))
        .collect();

    let mut out = format!("   {}\n", letters.trim_end());
    for (y, row) in board.lines().enumerate() {
        out.push_str(&format!("{:>2} {}\n", size - y, row));
    }
    if let Some(result) = game.result() {
        out.push_str(&format!("Result: {result}\n"));
    }
    out
}

fn both_passed(game: &GoGame) -> bool {
    let moves = game.moves_to_current();
    moves.len() >= 2 && moves[moves.len() - 2..].iter().all(|m| m.kind == MoveKind::Pass)
}

async fn show(session: &Session) -> Result<()> {
    let text = blocking(session, |e| Ok(render(e.game()))).await?;
    println!("{text}");
    Ok(())
}

/// True while the game is running and the model has the engine to move.
fn engine_to_move<T: Transport>(engine: &GtpEngine<T, GoGame>) -> bool {
    engine.is_engine_turn() && engine.game().result().is_none()
}

/// Lets the engine move if the model says it is its turn.
async fn engine_turn(session: &Session) -> Result<()> {
    let to_move = blocking(session, |e| Ok(engine_to_move(e))).await?;
    if !to_move {
        return Ok(());
    }

    println!("Engine is thinking...");
    let answer = blocking(session, |e| {
        let size = e.board_size();
        Ok(e.gen_move()?.map(|v| strictly_gtp::encode(v, size)))
    })
    .await?;
    match answer {
        Some(vertex) => println!("Engine plays {vertex}"),
        None => println!("Engine did not produce a move"),
    }
    show(session).await
}

/// Plays an interactive game on stdin/stdout.
#[instrument(skip(config), fields(engine = %config.name()))]
pub async fn run(config: EngineConfig) -> Result<()> {
    let transport = config.spawn()?;
    let settings = config.game().clone();
    let guard = *config.double_undo_guard();
    let allow_double_undo = *config.allow_double_undo();

    let engine = tokio::task::spawn_blocking(move || {
        GtpEngine::<_, GoGame>::start(transport, &settings)
    })
    .await
    .context("Engine task panicked")??;
    let session = SharedEngine::new(engine.with_double_undo_guard(guard));

    if let Some(level) = *config.level() {
        if !blocking(&session, move |e| e.set_level(level)).await? {
            println!("Engine ignored level {level}");
        }
    }

    let (player, handicap) = blocking(&session, |e| {
        Ok((e.player_color(), e.game().handicap()))
    })
    .await?;
    println!("{} - you play {player}, handicap {handicap}", config.name());
    println!("{HELP}");
    show(&session).await?;
    engine_turn(&session).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Empty => continue,
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
            Input::Board => {
                let diagram = blocking(&session, |e| e.ascii_board()).await?;
                println!("{}", diagram.unwrap_or_else(|| "Engine cannot show its board".into()));
            }
            Input::Swap => {
                blocking(&session, |e| {
                    e.switch_colors();
                    Ok(())
                })
                .await?;
                println!("Colors switched");
                engine_turn(&session).await?;
            }
            Input::Undo => {
                if blocking(&session, move |e| e.undo(allow_double_undo)).await? {
                    show(&session).await?;
                    engine_turn(&session).await?;
                } else {
                    println!("Nothing to undo");
                }
            }
            Input::Score => {
                let result = blocking(&session, |e| {
                    e.collect_final_status()?;
                    e.compute_final_score()
                })
                .await?;
                show(&session).await?;
                match result {
                    Some(result) => println!("Final score: {result}"),
                    None => println!("Engine could not score the game"),
                }
            }
            Input::Move(token) => {
                let vertex = blocking(&session, move |e| Ok(decode(&token, e.board_size()))).await?;
                match vertex {
                    None => println!("Not a point on this board. {HELP}"),
                    Some(Vertex::Resign) => println!("Type quit to leave the game"),
                    Some(vertex) => {
                        if blocking(&session, move |e| e.play(vertex)).await? {
                            show(&session).await?;
                            if blocking(&session, |e| Ok(both_passed(e.game()))).await? {
                                println!("Both players passed. Type score to count the game.");
                            } else {
                                engine_turn(&session).await?;
                            }
                        } else {
                            println!("Illegal move");
                        }
                    }
                }
            }
        }
    }

    info!("Session closed");
    Ok(())
}

/// Prints the engine's name, version and board.
#[instrument(skip(config), fields(engine = %config.name()))]
pub async fn info(config: EngineConfig) -> Result<()> {
    let transport = config.spawn()?;
    let settings = config.game().clone();
    let (name, version, board) = tokio::task::spawn_blocking(move || {
        let mut engine = GtpEngine::<_, GoGame>::start(transport, &settings)?;
        Ok::<_, GtpError>((
            engine.engine_name()?,
            engine.engine_version()?,
            engine.ascii_board()?,
        ))
    })
    .await
    .context("Engine task panicked")??;

    println!("Name:    {}", name.as_deref().unwrap_or("unknown"));
    println!("Version: {}", version.as_deref().unwrap_or("unknown"));
    if let Some(board) = board {
        println!("{board}");
    }
    Ok(())
}
