//! Move ordering strategies
//!
//! Ordering never changes what a search returns, only how quickly alpha-beta
//! can cut off branches. Every strategy returns a fresh vector and uses a
//! stable sort, so moves that compare equal keep their row-major order.

use serde::{Deserialize, Serialize};

use crate::board::{GameState, Pos};
use crate::eval::HeuristicEvaluator;

/// Reorders candidate moves before they are expanded.
pub trait MoveOrdering: Send + Sync {
    /// Return `moves` in exploration order. The input is left untouched.
    fn order_moves(&self, state: &GameState, moves: &[Pos]) -> Vec<Pos>;

    /// Short name for logs and diagnostics
    fn name(&self) -> &'static str;
}

/// Row-major order, the same order [`GameState::legal_moves`] produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrdering;

impl MoveOrdering for DefaultOrdering {
    fn order_moves(&self, _state: &GameState, moves: &[Pos]) -> Vec<Pos> {
        let mut sorted = moves.to_vec();
        sorted.sort();
        sorted
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

/// Closest to the center cell `(m/2, m/2)` first, by Manhattan distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterFirstOrdering;

impl MoveOrdering for CenterFirstOrdering {
    fn order_moves(&self, state: &GameState, moves: &[Pos]) -> Vec<Pos> {
        let center = Pos::new(state.size() / 2, state.size() / 2);
        let mut sorted = moves.to_vec();
        sorted.sort_by_key(|mov| mov.manhattan(center));
        sorted
    }

    fn name(&self) -> &'static str {
        "center-first"
    }
}

/// Best heuristic score for the side to move first.
///
/// Each candidate is played and the resulting position evaluated from the
/// mover's viewpoint, so this costs one full evaluation per move per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicOrdering {
    evaluator: HeuristicEvaluator,
}

impl HeuristicOrdering {
    pub fn new(evaluator: HeuristicEvaluator) -> Self {
        Self { evaluator }
    }
}

impl MoveOrdering for HeuristicOrdering {
    fn order_moves(&self, state: &GameState, moves: &[Pos]) -> Vec<Pos> {
        let mover = state.current_player();
        let mut scored: Vec<(Pos, i64)> = moves
            .iter()
            .map(|&mov| {
                // Unplayable candidates sink to the end instead of being dropped
                let score = state
                    .make_move(mov)
                    .map_or(i64::MIN, |child| self.evaluator.evaluate(&child, mover));
                (mov, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(mov, _)| mov).collect()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Ordering selectable from configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKind {
    #[default]
    Default,
    CenterFirst,
    Heuristic,
}

impl OrderingKind {
    /// Instantiate the strategy
    pub fn build(self) -> Box<dyn MoveOrdering> {
        match self {
            OrderingKind::Default => Box::new(DefaultOrdering),
            OrderingKind::CenterFirst => Box::new(CenterFirstOrdering),
            OrderingKind::Heuristic => Box::new(HeuristicOrdering::new(HeuristicEvaluator::new())),
        }
    }
}
