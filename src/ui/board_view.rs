//! Board rendering for the desktop front-end

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{GameState, Player, Pos};

use super::theme::*;

/// Everything the board needs to draw besides the state itself.
pub struct Overlay<'a> {
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
    /// Board size the cache was computed for
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            grid_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_px = (available_size.x.min(available_size.y) - 20.0).max(120.0);

        self.size = state.size();
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), Sense::click());
        let board_rect = response.rect;
        self.grid_rect = board_rect.shrink(BOARD_MARGIN);

        painter.rect_filled(board_rect, CornerRadius::same(6), BOARD_BG);

        if let Some(pos) = state.last_move() {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), LAST_MOVE_MARKER);
        }

        if let Some(pos) = overlay.suggested_move {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hint_fill());
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, state);

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;

        if overlay.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if state.is_empty(pos) {
                        painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_valid());
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the inner grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let max = self.grid_rect.max;

        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([Pos2::new(min.x + offset, min.y), Pos2::new(min.x + offset, max.y)], stroke);
            painter.line_segment([Pos2::new(min.x, min.y + offset), Pos2::new(max.x, min.y + offset)], stroke);
        }
    }

    /// Row and column indices along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.size {
            let center = self.grid_rect.min.x + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(center, self.grid_rect.min.y - BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                LABEL,
            );

            let middle = self.grid_rect.min.y + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, middle),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, state: &GameState) {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row, col);
                if let Some(player) = state.cell(pos) {
                    self.draw_mark(painter, pos, player);
                }
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RATIO;
        let width = (self.cell_size * MARK_STROKE_RATIO).max(2.0);

        match player {
            Player::X => {
                let stroke = Stroke::new(width, X_MARK);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Player::O => {
                painter.circle_stroke(center, radius, Stroke::new(width, O_MARK));
            }
        }
    }

    /// Stroke through the centers of the winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let (Some(first), Some(last)) = (line.first(), line.last()) else {
            return;
        };
        let stroke = Stroke::new((self.cell_size * 0.1).max(3.0), WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i64;
        let row = (relative.y / self.cell_size).floor() as i64;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
