//! Game-tree search engine for generalized m,k tic-tac-toe
//!
//! Two players alternate placing marks on an m×m board; the first to line
//! up `k` marks horizontally, vertically or diagonally wins.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Immutable game state, positions and players
//! - [`rules`]: Incremental k-in-a-row detection
//! - [`eval`]: Heuristic evaluation of unfinished positions
//! - [`search`]: Minimax, alpha-beta and depth-limited solvers, move ordering
//! - [`engine`]: Facade that builds a solver from configuration and times it
//! - [`config`]: TOML configuration
//! - [`ui`]: Desktop front-end
//!
//! # Quick Start
//!
//! ```
//! use mnk::{AlphaBetaSolver, GameState, Solver};
//!
//! let state = GameState::new(3, 3).unwrap();
//! let mut solver = AlphaBetaSolver::new();
//!
//! if let Some(pos) = solver.find_best_move(&state) {
//!     let next = state.make_move(pos).unwrap();
//!     println!("{next}");
//!     println!("nodes: {}", solver.nodes_evaluated());
//! }
//! ```
//!
//! # Performance
//!
//! Every move copies the whole grid, and the exhaustive solvers visit the
//! full game tree. Exhaustive search is practical up to about 4×4; use
//! [`DepthLimitedSolver`] beyond that.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{GameState, Player, Pos};
pub use engine::{Engine, MoveResult, SolverKind};
pub use error::{ConfigError, GameError};
pub use eval::HeuristicEvaluator;
pub use search::{
    AlphaBetaSolver, CenterFirstOrdering, DefaultOrdering, DepthLimitedSolver, HeuristicOrdering,
    MinimaxSolver, MoveOrdering, OrderingKind, SearchResult, Solver,
};
