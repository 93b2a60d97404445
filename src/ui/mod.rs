//! Desktop front-end using egui/eframe

mod app;
mod board_view;
mod session;
mod theme;

pub use app::MnkApp;
pub use session::{AiState, Session};
