//! Common solver interface

use crate::board::{GameState, Player, Pos};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only when the game at the root is already over
    pub best_move: Option<Pos>,
    /// Backed-up value of the best move, from the root mover's viewpoint
    pub score: i64,
    /// Nodes visited below the root
    pub nodes: u64,
}

impl SearchResult {
    /// A root that is already decided: no move, its terminal value, no nodes.
    pub(crate) fn decided(state: &GameState, root: Player) -> Self {
        Self {
            best_move: None,
            score: i64::from(state.utility() * root.sign()),
            nodes: 0,
        }
    }
}

/// A move-selection algorithm.
///
/// Solvers never modify the state they are given. Each call to
/// [`Solver::search`] resets the node counter.
pub trait Solver: Send {
    /// Search from `state` and report the best move for the side to move.
    fn search(&mut self, state: &GameState) -> SearchResult;

    /// Nodes visited by the most recent search
    fn nodes_evaluated(&self) -> u64;

    /// Short name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Best move for the side to move, or `None` if the game is over.
    fn find_best_move(&mut self, state: &GameState) -> Option<Pos> {
        self.search(state).best_move
    }
}

/// Play a move the search produced from `legal_moves()`.
///
/// Solvers only ever expand moves generated for the very state they hold,
/// so a rejection here means the search itself is broken.
#[inline]
pub(crate) fn play(state: &GameState, mov: Pos) -> GameState {
    match state.make_move(mov) {
        Ok(child) => child,
        Err(err) => unreachable!("search expanded an illegal move: {err}"),
    }
}
