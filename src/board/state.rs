//! Immutable game state with incremental win detection

use std::fmt;

use super::{Player, Pos};
use crate::error::{GameError, MoveRejection};
use crate::rules::has_line_at_pos;

/// Snapshot of an m×m board.
///
/// A state is never modified after construction: [`GameState::make_move`]
/// copies the grid into a new value and leaves the receiver untouched.
/// The copy is O(m²) per ply, which is what bounds practical board sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    size: usize,
    win_length: usize,
    cells: Vec<Option<Player>>,
    current: Player,
    winner: Option<Player>,
    terminal: bool,
    empty: usize,
    last_move: Option<Pos>,
}

impl GameState {
    /// Empty `m`×`m` board with `k` in a row needed to win. X moves first.
    pub fn new(m: usize, k: usize) -> Result<Self, GameError> {
        if m == 0 || k == 0 || k > m {
            return Err(GameError::InvalidDimensions { m, k });
        }
        Ok(Self {
            size: m,
            win_length: k,
            cells: vec![None; m * m],
            current: Player::X,
            winner: None,
            terminal: false,
            empty: m * m,
            last_move: None,
        })
    }

    /// Board dimension `m`
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Marks in a row needed to win (`k`)
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Player about to move
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Occupant of a cell. Out-of-bounds positions read as empty.
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Player> {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[pos.to_index(self.size)].is_none()
    }

    /// Empty cells in row-major order.
    ///
    /// This order is the default exploration order of every solver, so
    /// tie-breaking between equally valued moves depends on it.
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(self.empty);
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                moves.push(Pos::from_index(idx, self.size));
            }
        }
        moves
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Number of occupied cells
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty
    }

    /// Plies played so far
    #[inline]
    pub fn move_count(&self) -> usize {
        self.occupied_count()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Place the current player's mark at `pos` and return the resulting state.
    ///
    /// Only the four lines through `pos` are rechecked for a win.
    pub fn make_move(&self, pos: Pos) -> Result<GameState, GameError> {
        if !self.contains(pos) {
            return Err(GameError::InvalidMove {
                pos,
                reason: MoveRejection::OutOfBounds,
            });
        }
        if self.cells[pos.to_index(self.size)].is_some() {
            return Err(GameError::InvalidMove {
                pos,
                reason: MoveRejection::Occupied,
            });
        }

        let mover = self.current;
        let mut cells = self.cells.clone();
        cells[pos.to_index(self.size)] = Some(mover);

        let mut next = GameState {
            size: self.size,
            win_length: self.win_length,
            cells,
            current: mover.opponent(),
            winner: None,
            terminal: false,
            empty: self.empty - 1,
            last_move: Some(pos),
        };

        if has_line_at_pos(&next, pos, mover) {
            next.winner = Some(mover);
        }
        next.terminal = next.winner.is_some() || next.empty == 0;
        Ok(next)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Game-theoretic value from X's viewpoint: +1 X won, -1 O won, 0 otherwise.
    ///
    /// Only meaningful on terminal states.
    #[inline]
    pub fn utility(&self) -> i32 {
        self.winner.map_or(0, Player::sign)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cell(Pos::new(row, col)) {
                    Some(player) => f.write_str(player.symbol())?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
