//! Search module for m,k tic-tac-toe
//!
//! Contains:
//! - Exhaustive minimax search
//! - Exhaustive alpha-beta search
//! - Depth-limited alpha-beta with heuristic leaves
//! - Move ordering strategies shared by all three

pub mod alphabeta;
pub mod depth_limited;
pub mod minimax;
pub mod ordering;
pub mod solver;

pub use alphabeta::AlphaBetaSolver;
pub use depth_limited::DepthLimitedSolver;
pub use minimax::MinimaxSolver;
pub use ordering::{
    CenterFirstOrdering, DefaultOrdering, HeuristicOrdering, MoveOrdering, OrderingKind,
};
pub use solver::{SearchResult, Solver};
