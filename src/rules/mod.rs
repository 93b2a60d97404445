//! Game rules for m,k tic-tac-toe
//!
//! A player wins by completing `k` consecutive marks horizontally,
//! vertically or along either diagonal. Every empty cell is a legal move.

pub mod win;

// Re-exports for convenient access
pub use win::{has_line_at_pos, line_length_at, winning_line};
