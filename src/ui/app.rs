//! Main application for the m,k desktop front-end

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::session::Session;
use super::theme::*;
use crate::config::{AppConfig, Seat};
use crate::{GameError, Player};

/// Main m,k application
pub struct MnkApp {
    session: Session,
    board_view: BoardView,
    show_stats: bool,
}

impl MnkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, GameError> {
        Ok(Self {
            session: Session::new(&config)?,
            board_view: BoardView::default(),
            show_stats: true,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play X)").clicked() {
                        self.session.reset(Seat::HumanX);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play O)").clicked() {
                        self.session.reset(Seat::HumanO);
                        ui.close_menu();
                    }
                    if ui.button("New Game (hot-seat)").clicked() {
                        self.session.reset(Seat::Hotseat);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Engine Stats (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let state = &self.session.state;
                    let seat = match self.session.seat {
                        Seat::HumanX => "You: X",
                        Seat::HumanO => "You: O",
                        Seat::Hotseat => "Hot-seat",
                    };
                    ui.label(format!(
                        "{}×{}, k={} - {seat}",
                        state.size(),
                        state.size(),
                        state.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if self.session.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        let state = &self.session.state;
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("M,N,K").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} in a row on {}×{}", state.win_length(), state.size(), state.size()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.state.current_player();
            let accent = match player {
                Player::X => X_MARK,
                Player::O => O_MARK,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.symbol(),
                    egui::FontId::proportional(26.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{player} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        let secs = self
                            .session
                            .ai_thinking_elapsed()
                            .map(|d| d.as_secs_f32())
                            .unwrap_or_default();
                        (format!("Engine thinking... {secs:.1}s"), STATUS_BUSY)
                    } else if self.session.is_game_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Engine to move".to_string(), STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if let Some(ai_time) = self.session.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last engine move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if Self::text_button(ui, "Undo").clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                if self.session.seat == Seat::Hotseat {
                    btn_frame.show(ui, |ui| {
                        let label = if self.session.is_hinting() { "Hint..." } else { "Hint" };
                        if Self::text_button(ui, label).clicked() {
                            self.session.request_suggestion();
                        }
                    });
                    ui.add_space(4.0);
                }

                btn_frame.show(ui, |ui| {
                    if Self::text_button(ui, "New Game").clicked() {
                        let seat = self.session.seat;
                        self.session.reset(seat);
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn text_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
        ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
    }

    /// Render engine statistics for the last search
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(result.solver).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.session.state.winner() {
            Some(player) => format!("{player} WINS!"),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if Self::text_button(ui, "New Game").clicked() {
                                let seat = self.session.seat;
                                self.session.reset(seat);
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_WARN_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.session.winning_line();
            let overlay = Overlay {
                suggested_move: self.session.suggested_move,
                winning_line: winning_line.as_deref(),
                interactive: self.session.is_human_turn()
                    && !self.session.is_game_over()
                    && !self.session.is_ai_thinking(),
            };

            let clicked = ui
                .vertical_centered(|ui| self.board_view.show(ui, &self.session.state, &overlay))
                .inner;

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_stats = !self.show_stats;
            }

            if i.key_pressed(egui::Key::H) && self.session.seat == Seat::Hotseat {
                self.session.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }

            if i.key_pressed(egui::Key::N) {
                let seat = self.session.seat;
                self.session.reset(seat);
            }
        });
    }
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_engine_busy() {
            ctx.request_repaint();
        }
    }
}
