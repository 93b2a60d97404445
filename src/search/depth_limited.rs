//! Depth-limited alpha-beta search with heuristic leaves
//!
//! Each root move is searched `max_depth` further plies; positions at the
//! horizon, and decided positions, are scored by [`HeuristicEvaluator`]
//! from the root mover's fixed viewpoint.

use tracing::{debug, trace};

use crate::board::{GameState, Player};
use crate::eval::HeuristicEvaluator;

use super::ordering::{DefaultOrdering, MoveOrdering};
use super::solver::{play, SearchResult, Solver};

/// Bounded alpha-beta search.
pub struct DepthLimitedSolver {
    max_depth: u32,
    evaluator: HeuristicEvaluator,
    ordering: Box<dyn MoveOrdering>,
    nodes: u64,
}

impl DepthLimitedSolver {
    /// Bounded search with the default evaluator and row-major ordering
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self::with_parts(max_depth, HeuristicEvaluator::new(), Box::new(DefaultOrdering))
    }

    #[must_use]
    pub fn with_parts(
        max_depth: u32,
        evaluator: HeuristicEvaluator,
        ordering: Box<dyn MoveOrdering>,
    ) -> Self {
        Self {
            max_depth,
            evaluator,
            ordering,
            nodes: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Recursive alpha-beta, leaves scored for the root mover `root`.
    fn alpha_beta(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        root: Player,
    ) -> i64 {
        self.nodes += 1;

        if state.is_terminal() || depth == 0 {
            return self.evaluator.evaluate(state, root);
        }

        let moves = self.ordering.order_moves(state, &state.legal_moves());

        if maximizing {
            let mut max_eval = i64::MIN;
            for mov in moves {
                let child = play(state, mov);
                let eval = self.alpha_beta(&child, depth - 1, alpha, beta, false, root);
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
                let eval = self.alpha_beta(&child, depth - 1, alpha, beta, true, root);
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

impl Solver for DepthLimitedSolver {
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
            let score =
                self.alpha_beta(&child, self.max_depth, i64::MIN, i64::MAX, false, root);
            trace!(%mov, score, "depth-limited root move");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        debug!(
            solver = self.name(),
            ordering = self.ordering.name(),
            depth = self.max_depth,
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
        "depth-limited"
    }
}
