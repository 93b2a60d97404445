//! Win condition checking
//!
//! Only lines through the most recently placed mark can have changed, so
//! the checks here walk outward from a single cell along the four
//! directions instead of rescanning the whole board.

use crate::board::{GameState, Player, Pos, DIRECTIONS};

/// Count of consecutive `player` marks starting next to `pos` and stepping by `(dr, dc)`.
fn run_length(state: &GameState, pos: Pos, player: Player, dr: i64, dc: i64) -> usize {
    let mut count = 0;
    let mut step = 1;
    while let Some(p) = pos.offset(dr, dc, step, state.size()) {
        if state.cell(p) != Some(player) {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the `player` line through `pos` along `(dr, dc)`, counting `pos` itself.
#[inline]
pub fn line_length_at(state: &GameState, pos: Pos, player: Player, dr: i64, dc: i64) -> usize {
    1 + run_length(state, pos, player, dr, dc) + run_length(state, pos, player, -dr, -dc)
}

/// Fast k-in-a-row check through a specific position.
///
/// Only checks the 4 lines through `pos`. O(k) per direction, no allocation.
#[inline]
pub fn has_line_at_pos(state: &GameState, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length_at(state, pos, player, dr, dc) >= state.win_length())
}

/// Cells of the winning line through the last move, if that move won.
///
/// Returned in order along the line, covering the whole run (which may be
/// longer than `k`).
pub fn winning_line(state: &GameState) -> Option<Vec<Pos>> {
    let pos = state.last_move()?;
    let player = state.winner()?;
    if state.cell(pos) != Some(player) {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        if line_length_at(state, pos, player, dr, dc) < state.win_length() {
            continue;
        }
        let back = run_length(state, pos, player, -dr, -dc) as i64;
        let forward = run_length(state, pos, player, dr, dc) as i64;
        let line = (-back..=forward)
            .filter_map(|step| pos.offset(dr, dc, step, state.size()))
            .collect();
        return Some(line);
    }
    None
}
