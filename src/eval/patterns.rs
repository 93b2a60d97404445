//! Scoring weights for the heuristic evaluation

/// Weights used by [`HeuristicEvaluator`](super::HeuristicEvaluator)
pub struct PatternScore;

impl PatternScore {
    /// Base of the per-window exponential: a window holding `n` marks of one
    /// player and nothing else is worth `WINDOW_BASE^n`.
    pub const WINDOW_BASE: i64 = 10;
    /// Occupying the center cell
    pub const CENTER: i64 = 3;
    /// Occupying a cell adjacent to the center
    pub const CENTER_NEIGHBOR: i64 = 1;
}

/// Score of a single length-`k` window.
///
/// `mine` and `theirs` count the marks of the evaluating player and its
/// opponent inside the window. Mixed windows can never be completed by
/// either side and score 0, as do empty windows.
#[inline]
pub fn window_score(mine: u32, theirs: u32) -> i64 {
    match (mine, theirs) {
        (0, 0) => 0,
        (m, 0) => PatternScore::WINDOW_BASE.saturating_pow(m),
        (0, t) => -PatternScore::WINDOW_BASE.saturating_pow(t),
        _ => 0,
    }
}
