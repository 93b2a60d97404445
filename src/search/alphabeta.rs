//! Exhaustive alpha-beta search
//!
//! Same backward induction as [`MinimaxSolver`](super::MinimaxSolver), with
//! branches abandoned as soon as they cannot affect the result. The chosen
//! move and its value always match minimax; only the node count differs,
//! and how much it drops depends on the move ordering applied at every node.
//!
//! # Example
//!
//! ```
//! use mnk::board::GameState;
//! use mnk::search::{AlphaBetaSolver, Solver};
//!
//! let state = GameState::new(3, 3).unwrap();
//! let mut solver = AlphaBetaSolver::new();
//! let best = solver.find_best_move(&state);
//! assert!(best.is_some());
//! ```

use tracing::{debug, trace};

use crate::board::{GameState, Player};

use super::ordering::{DefaultOrdering, MoveOrdering};
use super::solver::{play, SearchResult, Solver};

/// Minimax with alpha-beta pruning, searched to terminal states.
pub struct AlphaBetaSolver {
    ordering: Box<dyn MoveOrdering>,
    nodes: u64,
}

impl AlphaBetaSolver {
    /// Alpha-beta with row-major move order
    #[must_use]
    pub fn new() -> Self {
        Self::with_ordering(Box::new(DefaultOrdering))
    }

    #[must_use]
    pub fn with_ordering(ordering: Box<dyn MoveOrdering>) -> Self {
        Self { ordering, nodes: 0 }
    }

    /// Recursive alpha-beta, values from `root`'s viewpoint.
    fn alpha_beta(
        &mut self,
        state: &GameState,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        root: Player,
    ) -> i64 {
        self.nodes += 1;

        if state.is_terminal() {
            return i64::from(state.utility() * root.sign());
        }

        let moves = self.ordering.order_moves(state, &state.legal_moves());

        if maximizing {
            let mut max_eval = i64::MIN;
            for mov in moves {
                let child = play(state, mov);
                let eval = self.alpha_beta(&child, alpha, beta, false, root);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i64::MAX;
            for mov in moves {
                let child = play(state, mov);
                let eval = self.alpha_beta(&child, alpha, beta, true, root);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

impl Default for AlphaBetaSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for AlphaBetaSolver {
    fn search(&mut self, state: &GameState) -> SearchResult {
        self.nodes = 0;
        let root = state.current_player();
        if state.is_terminal() {
            return SearchResult::decided(state, root);
        }

        let moves = self.ordering.order_moves(state, &state.legal_moves());

        let mut best_move = moves.first().copied();
        let mut best_score = i64::MIN;

        // Every root move gets a full window, as in plain minimax
        for mov in moves {
            let child = play(state, mov);
            let score = self.alpha_beta(&child, i64::MIN, i64::MAX, false, root);
            trace!(%mov, score, "alpha-beta root move");

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
        "alpha-beta"
    }
}
