//! Exhaustive minimax search
//!
//! Searches every line of play down to terminal states. Only practical on
//! very small boards: the empty 3×3 tree alone has over half a million nodes.

use tracing::{debug, trace};

use crate::board::{GameState, Player};

use super::ordering::{DefaultOrdering, MoveOrdering};
use super::solver::{play, SearchResult, Solver};

/// Plain backward induction with no pruning.
pub struct MinimaxSolver {
    ordering: Box<dyn MoveOrdering>,
    nodes: u64,
}

impl MinimaxSolver {
    /// Minimax with row-major move order
    #[must_use]
    pub fn new() -> Self {
        Self::with_ordering(Box::new(DefaultOrdering))
    }

    #[must_use]
    pub fn with_ordering(ordering: Box<dyn MoveOrdering>) -> Self {
        Self { ordering, nodes: 0 }
    }

    /// Value of `state` for `root`, with `maximizing` telling whose layer this is.
    fn minimax(&mut self, state: &GameState, maximizing: bool, root: Player) -> i64 {
        self.nodes += 1;

        if state.is_terminal() {
            return i64::from(state.utility() * root.sign());
        }

        let moves = self.ordering.order_moves(state, &state.legal_moves());

        if maximizing {
            let mut max_eval = i64::MIN;
            for mov in moves {
                let child = play(state, mov);
                max_eval = max_eval.max(self.minimax(&child, false, root));
            }
            max_eval
        } else {
            let mut min_eval = i64::MAX;
            for mov in moves {
                let child = play(state, mov);
                min_eval = min_eval.min(self.minimax(&child, true, root));
            }
            min_eval
        }
    }
}

impl Default for MinimaxSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MinimaxSolver {
    fn search(&mut self, state: &GameState) -> SearchResult {
        self.nodes = 0;
        let root = state.current_player();
        if state.is_terminal() {
            return SearchResult::decided(state, root);
        }

        let moves = self.ordering.order_moves(state, &state.legal_moves());

        let mut best_move = moves.first().copied();
        let mut best_score = i64::MIN;

        for mov in moves {
            let child = play(state, mov);
            let score = self.minimax(&child, false, root);
            trace!(%mov, score, "minimax root move");

            // Strictly greater: the first move to reach the maximum keeps it
            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        debug!(
            solver = self.name(),
            ordering = self.ordering.name(),
            best = ?best_move,
            score = best_score,
            nodes = self.nodes,
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    fn nodes_evaluated(&self) -> u64 {
        self.nodes
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
