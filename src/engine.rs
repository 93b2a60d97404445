//! Engine facade over the search solvers
//!
//! The front-ends talk to an [`Engine`] rather than to a solver directly.
//! It builds the configured solver, times each search and logs the result.
//!
//! # Example
//!
//! ```
//! use mnk::{Engine, GameState};
//! use mnk::config::{EngineConfig, GameConfig};
//!
//! let game = GameConfig::default();
//! let mut engine = Engine::from_config(&EngineConfig::default(), &game);
//! let state = GameState::new(game.size, game.win_length).unwrap();
//!
//! let result = engine.get_move_with_stats(&state);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{GameState, Pos};
use crate::config::{EngineConfig, GameConfig};
use crate::eval::HeuristicEvaluator;
use crate::search::{
    AlphaBetaSolver, DepthLimitedSolver, HeuristicOrdering, MinimaxSolver, OrderingKind, Solver,
};

/// `Auto` searches exhaustively once at most this many cells are empty.
pub const AUTO_EXHAUSTIVE_EMPTY: usize = 10;

/// Solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Pick per position by the number of empty cells
    #[default]
    Auto,
    Minimax,
    AlphaBeta,
    DepthLimited,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up value of the move for the side that played it
    pub score: i64,
    /// Name of the solver that produced the move
    pub solver: &'static str,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

enum Selection {
    Fixed(Box<dyn Solver>),
    /// Exhaustive near the end of the game, bounded before that
    Auto {
        exhaustive: Box<dyn Solver>,
        bounded: Box<dyn Solver>,
    },
}

/// Owns the configured solver(s) and runs them on request.
pub struct Engine {
    selection: Selection,
}

impl Engine {
    pub fn new(solver: Box<dyn Solver>) -> Self {
        Self {
            selection: Selection::Fixed(solver),
        }
    }

    /// Build the solver described by `config` for boards shaped like `game`.
    ///
    /// `Auto` decides per position: with at most [`AUTO_EXHAUSTIVE_EMPTY`]
    /// empty cells it runs exhaustive alpha-beta (row-major ordering on the
    /// classic 3×3 board, heuristic ordering elsewhere), otherwise
    /// depth-limited search with heuristic ordering.
    pub fn from_config(config: &EngineConfig, game: &GameConfig) -> Self {
        let ordering = config.ordering;
        let solver: Box<dyn Solver> = match config.solver {
            SolverKind::Minimax => Box::new(MinimaxSolver::with_ordering(ordering.build())),
            SolverKind::AlphaBeta => Box::new(AlphaBetaSolver::with_ordering(ordering.build())),
            SolverKind::DepthLimited => Box::new(DepthLimitedSolver::with_parts(
                config.depth,
                HeuristicEvaluator::new(),
                ordering.build(),
            )),
            SolverKind::Auto => {
                return Self {
                    selection: Self::auto_selection(config, game),
                }
            }
        };
        Self::new(solver)
    }

    fn auto_selection(config: &EngineConfig, game: &GameConfig) -> Selection {
        let exhaustive: Box<dyn Solver> = if game.size == 3 && game.win_length == 3 {
            Box::new(AlphaBetaSolver::new())
        } else {
            Box::new(AlphaBetaSolver::with_ordering(OrderingKind::Heuristic.build()))
        };
        let bounded: Box<dyn Solver> = Box::new(DepthLimitedSolver::with_parts(
            config.depth,
            HeuristicEvaluator::new(),
            Box::new(HeuristicOrdering::new(HeuristicEvaluator::new())),
        ));
        Selection::Auto { exhaustive, bounded }
    }

    /// The solver that will search `state`
    pub fn solver_for(&mut self, state: &GameState) -> &mut dyn Solver {
        match &mut self.selection {
            Selection::Fixed(solver) => solver.as_mut(),
            Selection::Auto { exhaustive, bounded } => {
                if state.empty_count() <= AUTO_EXHAUSTIVE_EMPTY {
                    exhaustive.as_mut()
                } else {
                    bounded.as_mut()
                }
            }
        }
    }

    /// Name of the configured solver, `"auto"` when it varies per position
    pub fn solver_name(&self) -> &'static str {
        match &self.selection {
            Selection::Fixed(solver) => solver.name(),
            Selection::Auto { .. } => "auto",
        }
    }

    /// Get the best move for the side to move
    pub fn get_move(&mut self, state: &GameState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Search `state` and report the move together with timing and node counts.
    pub fn get_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        let solver = self.solver_for(state);
        let start = Instant::now();
        let result = solver.search(state);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            solver = solver.name(),
            player = %state.current_player(),
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "engine move"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            solver: solver.name(),
            nodes: result.nodes,
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_for(solver: SolverKind, ordering: OrderingKind, size: usize, k: usize) -> Engine {
        let config = EngineConfig {
            solver,
            ordering,
            depth: 2,
        };
        let game = GameConfig {
            size,
            win_length: k,
        };
        Engine::from_config(&config, &game)
    }

    fn replay(m: usize, k: usize, moves: &[(usize, usize)]) -> GameState {
        moves.iter().fold(GameState::new(m, k).unwrap(), |s, &(r, c)| {
            s.make_move(Pos::new(r, c)).unwrap()
        })
    }

    #[test]
    fn test_auto_selection() {
        let mut classic = engine_for(SolverKind::Auto, OrderingKind::Default, 3, 3);
        assert_eq!(classic.solver_name(), "auto");
        assert_eq!(classic.solver_for(&GameState::new(3, 3).unwrap()).name(), "alpha-beta");

        let mut five = engine_for(SolverKind::Auto, OrderingKind::Default, 5, 4);
        assert_eq!(five.solver_for(&GameState::new(5, 4).unwrap()).name(), "depth-limited");
    }

    #[test]
    fn test_auto_bounds_search_on_empty_4x4() {
        let mut engine = engine_for(SolverKind::Auto, OrderingKind::Default, 4, 3);
        let empty = GameState::new(4, 3).unwrap();
        assert_eq!(engine.solver_for(&empty).name(), "depth-limited");

        let result = engine.get_move_with_stats(&empty);
        assert_eq!(result.solver, "depth-limited");
        assert!(result.best_move.is_some_and(|pos| empty.is_empty(pos)));
    }

    #[test]
    fn test_auto_goes_exhaustive_near_the_end() {
        // six marks on a 4×4 leave exactly the exhaustive threshold
        let state = replay(4, 3, &[(0, 0), (3, 0), (0, 1), (3, 1), (3, 3), (2, 1)]);
        assert_eq!(state.empty_count(), AUTO_EXHAUSTIVE_EMPTY);

        let mut engine = engine_for(SolverKind::Auto, OrderingKind::Default, 4, 3);
        let result = engine.get_move_with_stats(&state);
        assert_eq!(result.solver, "alpha-beta");
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_explicit_selection() {
        assert_eq!(engine_for(SolverKind::Minimax, OrderingKind::Default, 3, 3).solver_name(), "minimax");
        assert_eq!(
            engine_for(SolverKind::DepthLimited, OrderingKind::CenterFirst, 3, 3).solver_name(),
            "depth-limited"
        );
    }

    #[test]
    fn test_move_result_reports_search() {
        let mut engine = engine_for(SolverKind::AlphaBeta, OrderingKind::Default, 3, 3);
        let state = GameState::new(3, 3)
            .unwrap()
            .make_move(Pos::new(1, 1))
            .unwrap();
        let result = engine.get_move_with_stats(&state);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(result.solver, "alpha-beta");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_get_move_on_finished_game() {
        let state = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
            .iter()
            .fold(GameState::new(3, 3).unwrap(), |s, &(r, c)| {
                s.make_move(Pos::new(r, c)).unwrap()
            });
        let mut engine = engine_for(SolverKind::AlphaBeta, OrderingKind::Default, 3, 3);
        assert_eq!(engine.get_move(&state), None);
    }
}
