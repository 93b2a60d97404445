//! Evaluation module for non-terminal positions
//!
//! The heuristic sums three independent signals:
//! - Line potential over every length-`k` window
//! - Center control
//! - Mobility (empty cells)

pub mod heuristic;
pub mod patterns;

pub use heuristic::HeuristicEvaluator;
pub use patterns::{window_score, PatternScore};
