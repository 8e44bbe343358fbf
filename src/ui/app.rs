//! Main application for the Ultimate Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{Coord, MetaCell, MAX_DEPTH};
use crate::eval::evaluate;
use crate::{EngineConfig, GameConfig, Outcome, Player, PlayerKind};

use super::board_view::{BoardView, ViewState};
use super::game_state::GameState;
use super::theme::*;

/// Main Ultimate Tic-Tac-Toe application
pub struct UtttApp {
    state: GameState,
    board_view: BoardView,
    /// Settings edited in the menu, applied on the next new game
    pending: GameConfig,
    show_debug: bool,
}

impl UtttApp {
    /// Create the app with the given starting configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            pending: config,
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.restart_with(self.pending);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_suggestion();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Players", |ui| {
                    player_combo(ui, "O", &mut self.pending.player_o);
                    player_combo(ui, "X", &mut self.pending.player_x);

                    let mut depth = self.pending.engine.max_depth();
                    ui.add(egui::Slider::new(&mut depth, 1..=MAX_DEPTH as u8).text("Minimax depth"));
                    if let Ok(engine) = EngineConfig::new(depth) {
                        self.pending.engine = engine;
                    }

                    ui.separator();
                    if ui.button("Start").clicked() {
                        self.state.restart_with(self.pending);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.state.config;
                    ui.label(format!(
                        "O: {}  vs  X: {}  (depth {})",
                        config.player_o,
                        config.player_x,
                        config.engine.max_depth()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
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

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_meta_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui, outcome) {
                        self.state.restart_with(self.pending);
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("O X").size(20.0).strong().color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("ULTIMATE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("tic-tac-toe of tic-tac-toes").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let accent = player_color(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, egui::Color32::from_rgb(55, 59, 66));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(28.0),
                    accent,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} ({})", turn, self.state.kind_of(turn)))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Computer to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            let board = self.state.game.board();
            if !board.is_game_over() {
                ui.add_space(6.0);
                let target = match board.active_board() {
                    Some(pos) => format!("Play in sub-board {pos}"),
                    None => "Play in any open sub-board".to_string(),
                };
                ui.label(RichText::new(target).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Sub-boards claimed by each side and the static evaluation
    fn render_meta_card(&self, ui: &mut egui::Ui) {
        let board = self.state.game.board();
        let (mut won_o, mut won_x, mut drawn) = (0, 0, 0);
        for pos in Coord::ALL {
            match board.meta_cell(pos) {
                MetaCell::Won(Player::O) => won_o += 1,
                MetaCell::Won(Player::X) => won_x += 1,
                MetaCell::Drawn => drawn += 1,
                MetaCell::Open => {}
            }
        }

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SUB-BOARDS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("O {won_o}")).size(16.0).strong().color(O_MARK));
                ui.add_space(12.0);
                ui.label(RichText::new(format!("X {won_x}")).size(16.0).strong().color(X_MARK));
                ui.add_space(12.0);
                ui.label(RichText::new(format!("N {drawn}")).size(16.0).color(DRAWN_MARK));
            });

            ui.add_space(6.0);
            let score = evaluate(board);
            let color = match score.signum() {
                1 => O_MARK,
                -1 => X_MARK,
                _ => TEXT_SECONDARY,
            };
            ui.label(RichText::new(format!("Heuristic: {score:+}")).size(11.0).color(color));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if action_label(ui, "Undo").clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if self.state.is_human_turn() {
                    btn_frame.show(ui, |ui| {
                        if action_label(ui, "Hint").clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.record().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("Depth {}", result.depth))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            ui.label(RichText::new(format!("{} leaves", result.leaves)).size(10.0).color(TEXT_MUTED));
                            ui.label(RichText::new(format!("{} cutoffs", result.cutoffs)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> {}", result.best_move))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            });
    }

    /// Render game over card; returns true when a new game is requested
    fn render_game_over_card(&self, ui: &mut egui::Ui, outcome: Outcome) -> bool {
        let mut new_game = false;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match outcome {
                        Outcome::Winner(winner) => {
                            ui.label(
                                RichText::new(winner.symbol().to_string())
                                    .size(32.0)
                                    .strong()
                                    .color(player_color(winner)),
                            );
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        }
                        Outcome::Draw => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                        }
                    }

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("after {} moves", self.state.game.record().len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if action_label(ui, "New Game").clicked() {
                                new_game = true;
                            }
                        });
                });
            });

        new_game
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let view = ViewState {
                current_turn: self.state.current_turn(),
                last_move: self.state.game.last_move(),
                suggested_move: self.state.suggested_move,
                winning_line: self.state.winning_line(),
                accepts_input: self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, self.state.game.board(), &view);

            if let Some(mv) = clicked {
                if let Err(msg) = self.state.try_place(mv) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint
            if i.key_pressed(egui::Key::H) && self.state.is_human_turn() {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.restart_with(self.pending);
            }
        });
    }
}

impl eframe::App for UtttApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.step_computer();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep frames coming while the clock runs
        if !self.state.is_game_over() {
            ctx.request_repaint();
        }
    }
}

fn player_color(player: Player) -> egui::Color32 {
    match player {
        Player::O => O_MARK,
        Player::X => X_MARK,
    }
}

fn player_combo(ui: &mut egui::Ui, side: &str, kind: &mut PlayerKind) {
    egui::ComboBox::from_label(format!("Player {side}"))
        .selected_text(kind.name())
        .show_ui(ui, |ui| {
            for option in PlayerKind::ALL {
                ui.selectable_value(kind, option, option.name());
            }
        });
}

fn action_label(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(egui::Color32::from_rgb(80, 60, 30))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("!").size(14.0).strong().color(TIMER_WARNING));
                ui.add_space(4.0);
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
        });
}
