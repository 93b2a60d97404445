//! Theme constants for the desktop front-end

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 229, 214);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 62, 52);
pub const LABEL: Color32 = Color32::from_rgb(120, 110, 98);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 64, 56);
pub const O_MARK: Color32 = Color32::from_rgb(48, 96, 180);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 215, 120);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

pub fn hint_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 200, 90, 60)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WARN_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
