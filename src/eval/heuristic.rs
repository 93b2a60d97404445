//! Heuristic evaluation function for m,k board positions
//!
//! Used at the leaves of depth-limited search and by heuristic move
//! ordering. Scores are unnormalized integers: a handful of open windows
//! can easily outweigh the ±1 returned for decided games.

use crate::board::{GameState, Player, Pos, DIRECTIONS};

use super::patterns::{window_score, PatternScore};

/// Stateless position evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `state` from the viewpoint of `perspective`.
    ///
    /// Terminal states return their utility flipped to `perspective`
    /// (+1 win, -1 loss, 0 draw). Otherwise the result is
    /// line potential + center control + mobility.
    ///
    /// The mobility term is the raw number of empty cells and is added for
    /// either perspective, so `evaluate(s, X)` is not `-evaluate(s, O)`.
    /// The center cell counts once (+3); it is not also counted as its own neighbour.
    #[must_use]
    pub fn evaluate(&self, state: &GameState, perspective: Player) -> i64 {
        if state.is_terminal() {
            return i64::from(state.utility() * perspective.sign());
        }

        let lines = Self::line_potential(state, perspective);
        let center = Self::center_control(state, perspective);
        let mobility = Self::mobility(state);

        lines.saturating_add(center).saturating_add(mobility)
    }

    /// Sum of window scores over every length-`k` window in all four directions.
    fn line_potential(state: &GameState, perspective: Player) -> i64 {
        let m = state.size() as i64;
        let k = state.win_length() as i64;
        let mut score = 0i64;

        for &(dr, dc) in &DIRECTIONS {
            for row in 0..m {
                for col in 0..m {
                    let end_r = row + dr * (k - 1);
                    let end_c = col + dc * (k - 1);
                    if !Pos::is_valid(end_r, end_c, state.size()) {
                        continue;
                    }
                    let start = Pos::new(row as usize, col as usize);
                    score = score.saturating_add(Self::window(state, start, dr, dc, perspective));
                }
            }
        }

        score
    }

    /// Score of the window starting at `start` and extending `k` cells along `(dr, dc)`.
    fn window(state: &GameState, start: Pos, dr: i64, dc: i64, perspective: Player) -> i64 {
        let opponent = perspective.opponent();
        let mut mine = 0u32;
        let mut theirs = 0u32;

        for step in 0..state.win_length() as i64 {
            let Some(pos) = start.offset(dr, dc, step, state.size()) else {
                return 0;
            };
            match state.cell(pos) {
                Some(p) if p == perspective => mine += 1,
                Some(p) if p == opponent => theirs += 1,
                _ => {}
            }
        }

        window_score(mine, theirs)
    }

    /// Bonus for holding the center cell and its neighbours.
    fn center_control(state: &GameState, perspective: Player) -> i64 {
        let m = state.size();
        let center = Pos::new(m / 2, m / 2);
        let mut score = 0;

        if state.cell(center) == Some(perspective) {
            score += PatternScore::CENTER;
        }

        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(pos) = center.offset(dr, dc, 1, m) {
                    if state.cell(pos) == Some(perspective) {
                        score += PatternScore::CENTER_NEIGHBOR;
                    }
                }
            }
        }

        score
    }

    /// Count of empty cells, independent of perspective.
    #[inline]
    fn mobility(state: &GameState) -> i64 {
        state.empty_count() as i64
    }
}
