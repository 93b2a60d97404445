//! Command-line interface for the mnk binary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use mnk::config::{AppConfig, Seat};
use mnk::{
    AlphaBetaSolver, DepthLimitedSolver, Engine, GameState, HeuristicOrdering, MinimaxSolver,
    Player, Pos, Solver,
};

/// Game-tree search for generalized m,k tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "mnk")]
#[command(about = "Play m,k tic-tac-toe against a minimax/alpha-beta engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "mnk.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the desktop board)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the desktop board
    Gui {
        #[command(flatten)]
        overrides: Overrides,

        /// Who sits at the board
        #[arg(long, value_enum)]
        seat: Option<Seat>,
    },

    /// Play in the terminal; the engine plays X
    Play {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Run the built-in self-check scenarios
    Check,
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Board dimension m
    #[arg(long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    pub win_length: Option<usize>,

    #[arg(long, value_enum)]
    pub solver: Option<mnk::SolverKind>,

    #[arg(long, value_enum)]
    pub ordering: Option<mnk::OrderingKind>,

    /// Ply bound for the depth-limited solver
    #[arg(long)]
    pub depth: Option<u32>,
}

impl Overrides {
    /// Apply the overrides and re-validate.
    pub fn apply(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(size) = self.size {
            config.game.size = size;
        }
        if let Some(win_length) = self.win_length {
            config.game.win_length = win_length;
        }
        if let Some(solver) = self.solver {
            config.engine.solver = solver;
        }
        if let Some(ordering) = self.ordering {
            config.engine.ordering = ordering;
        }
        if let Some(depth) = self.depth {
            config.engine.depth = depth;
        }
        config.validate().context("invalid command-line overrides")?;
        Ok(())
    }
}

/// Terminal game: the engine opens as X, the human answers with `row col`.
pub fn run_play(config: &AppConfig) -> Result<()> {
    let mut state = GameState::new(config.game.size, config.game.win_length)?;
    let mut engine = Engine::from_config(&config.engine, &config.game);

    println!("=== m,k tic-tac-toe ===");
    println!(
        "{0}x{0} board, {1} in a row wins; engine: {2}",
        state.size(),
        state.win_length(),
        engine.solver_name()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_terminal() {
        println!("\nCurrent board:\n{state}");
        println!("Current player: {}", state.current_player());

        if state.current_player() == Player::X {
            println!("Engine is thinking...");
            let result = engine.get_move_with_stats(&state);
            let Some(pos) = result.best_move else {
                bail!("engine found no move in a non-terminal position");
            };
            println!("Engine plays: {pos}");
            println!("Nodes evaluated: {} ({} ms)", result.nodes, result.time_ms);
            state = state.make_move(pos)?;
            continue;
        }

        print!("Enter your move (row col): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!("\nInput closed, leaving the game.");
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;

        let Some(pos) = parse_move(&line) else {
            println!("Expected two numbers, e.g. `1 2`. Try again.");
            continue;
        };
        match state.make_move(pos) {
            Ok(next) => state = next,
            Err(err) => println!("Invalid move: {err}. Try again."),
        }
    }

    println!("\n=== GAME OVER ===");
    println!("Final board:\n{state}");
    match state.winner() {
        Some(player) => println!("Winner: {player}!"),
        None => println!("It's a draw!"),
    }
    info!(winner = ?state.winner(), moves = state.move_count(), "terminal game finished");
    Ok(())
}

/// Parse `row col` separated by whitespace or a comma.
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn replay(m: usize, k: usize, moves: &[(usize, usize)]) -> Result<GameState> {
    let mut state = GameState::new(m, k)?;
    for &(row, col) in moves {
        state = state.make_move(Pos::new(row, col))?;
    }
    Ok(state)
}

/// Tally of self-check outcomes.
#[derive(Default)]
struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn check(&mut self, name: &str, ok: bool, detail: impl std::fmt::Display) {
        if ok {
            self.passed += 1;
            println!("PASS  {name}: {detail}");
        } else {
            self.failed += 1;
            println!("FAIL  {name}: {detail}");
        }
    }
}

/// Run the canonical scenarios, printing PASS/FAIL and node counts.
pub fn run_check() -> Result<()> {
    let mut report = Report::default();

    println!("--- Game state ---");
    let empty = GameState::new(3, 3)?;
    report.check(
        "initial state",
        empty.legal_moves().len() == 9
            && empty.current_player() == Player::X
            && !empty.is_terminal(),
        "9 legal moves, X to move",
    );
    let after = empty.make_move(Pos::new(1, 1))?;
    report.check(
        "make move",
        after.cell(Pos::new(1, 1)) == Some(Player::X)
            && empty.cell(Pos::new(1, 1)).is_none()
            && after.current_player() == Player::O
            && after.legal_moves().len() == 8,
        "parent untouched, O to move",
    );

    println!("\n--- Win conditions ---");
    let wins = [
        ("horizontal win", [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
        ("vertical win", [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
        ("diagonal win", [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]),
    ];
    for (name, moves) in wins {
        let state = replay(3, 3, &moves)?;
        report.check(
            name,
            state.is_terminal() && state.winner() == Some(Player::X) && state.utility() == 1,
            format!("winner {:?}", state.winner()),
        );
    }

    println!("\n--- Algorithms ---");
    let mut minimax = MinimaxSolver::new();
    let mut alphabeta = AlphaBetaSolver::new();
    let mm = minimax.search(&empty);
    let ab = alphabeta.search(&empty);
    report.check(
        "minimax move is legal",
        mm.best_move.is_some_and(|pos| empty.is_empty(pos)),
        format!("{:?}, {} nodes", mm.best_move, mm.nodes),
    );
    report.check(
        "alpha-beta move is legal",
        ab.best_move.is_some_and(|pos| empty.is_empty(pos)),
        format!("{:?}, {} nodes", ab.best_move, ab.nodes),
    );
    report.check(
        "minimax and alpha-beta agree",
        mm.best_move == ab.best_move && mm.score == ab.score,
        format!("score {}", ab.score),
    );
    report.check(
        "alpha-beta prunes",
        ab.nodes < mm.nodes,
        format!("{} nodes saved", mm.nodes.saturating_sub(ab.nodes)),
    );

    println!("\n--- Move ordering ---");
    // X to move with a single winning reply at (0,2)
    let forced = replay(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1)])?;
    let mut plain = AlphaBetaSolver::new();
    let mut ordered = AlphaBetaSolver::with_ordering(Box::new(HeuristicOrdering::default()));
    let plain_result = plain.search(&forced);
    let ordered_result = ordered.search(&forced);
    report.check(
        "ordering keeps the move",
        plain_result.best_move == ordered_result.best_move
            && plain_result.best_move == Some(Pos::new(0, 2)),
        format!(
            "{:?}; nodes {} unordered vs {} ordered",
            ordered_result.best_move, plain_result.nodes, ordered_result.nodes
        ),
    );

    println!("\n--- Larger boards ---");
    let board4 = replay(
        4,
        3,
        &[(1, 1), (2, 2), (1, 2), (1, 3), (2, 1), (3, 0), (0, 0), (3, 3)],
    )?;
    let mut solver4 = AlphaBetaSolver::with_ordering(Box::new(HeuristicOrdering::default()));
    let result4 = solver4.search(&board4);
    report.check(
        "4x4 k=3 move is legal",
        result4.best_move.is_some_and(|pos| board4.is_empty(pos)),
        format!("{:?}, {} nodes", result4.best_move, result4.nodes),
    );

    let board5 = GameState::new(5, 4)?;
    let mut solver5 = DepthLimitedSolver::new(2);
    let result5 = solver5.search(&board5);
    report.check(
        "5x5 k=4 move is legal",
        result5.best_move.is_some_and(|pos| board5.is_empty(pos)),
        format!("{:?}, {} nodes", result5.best_move, result5.nodes),
    );

    println!("\n{} passed, {} failed", report.passed, report.failed);
    if report.failed > 0 {
        bail!("{} self-check scenario(s) failed", report.failed);
    }
    Ok(())
}
