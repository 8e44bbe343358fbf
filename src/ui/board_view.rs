//! Board rendering for the Ultimate Tic-Tac-Toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Coord, MetaCell, Move, Player, GRID_SIZE};

use super::theme::*;

/// Cells along one side of the playing surface
const SURFACE: usize = GRID_SIZE * GRID_SIZE;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What the view needs besides the board itself
pub struct ViewState {
    pub current_turn: Player,
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    /// Meta-board coordinates of the winning line, if the game is won
    pub winning_line: Option<[Coord; 3]>,
    pub accepts_input: bool,
}

impl BoardView {
    /// Render the board and return the clicked move if it is legal
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, view: &ViewState) -> Option<Move> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / SURFACE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if !board.is_game_over() {
            self.draw_active_boards(&painter, board);
        }
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);
        self.draw_resolved_boards(&painter, board);

        if let Some(mv) = view.last_move {
            self.draw_last_move_marker(&painter, mv);
        }
        if let Some(mv) = view.suggested_move {
            self.draw_suggestion(&painter, mv, view.current_turn);
        }
        if let Some(line) = view.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if view.accepts_input && !board.is_game_over() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(mv) = self.screen_to_move(pointer_pos) {
                    let is_valid = board.is_legal(mv);
                    self.draw_hover_preview(&painter, mv, view.current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked = Some(mv);
                    }
                }
            }
        }

        clicked
    }

    /// Tint the sub-boards the next move may go to
    fn draw_active_boards(&self, painter: &Painter, board: &Board) {
        let targets: Vec<Coord> = match (board.active_board(), board.last_cell()) {
            (Some(target), _) => vec![target],
            (None, Some(_)) => Coord::ALL
                .into_iter()
                .filter(|&pos| board.meta_cell(pos).is_open())
                .collect(),
            (None, None) => return,
        };

        for pos in targets {
            painter.rect_filled(self.sub_board_rect(pos), CornerRadius::ZERO, active_board_fill());
        }
    }

    /// Draw the thin cell grid and the thick sub-board separators
    fn draw_grid(&self, painter: &Painter) {
        let thin = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let thick = Stroke::new(MACRO_LINE_WIDTH, MACRO_LINE);
        let extent = SURFACE as f32 * self.cell_size;

        for i in 1..SURFACE {
            let stroke = if i % GRID_SIZE == 0 { thick } else { thin };
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for mv in Move::all() {
            if let Cell::Taken(player) = board.cell(mv) {
                let radius = self.cell_size * MARK_RADIUS_RATIO;
                draw_mark(painter, self.move_to_screen(mv), radius, player, MARK_STROKE_WIDTH, 255);
            }
        }
    }

    /// Fade resolved sub-boards and draw their owner across them
    fn draw_resolved_boards(&self, painter: &Painter, board: &Board) {
        for pos in Coord::ALL {
            let meta = board.meta_cell(pos);
            if meta.is_open() {
                continue;
            }

            let rect = self.sub_board_rect(pos).shrink(MACRO_LINE_WIDTH);
            painter.rect_filled(rect, CornerRadius::ZERO, resolved_board_fill());

            let radius = self.cell_size * GRID_SIZE as f32 * MARK_RADIUS_RATIO;
            match meta {
                MetaCell::Won(player) => {
                    draw_mark(painter, rect.center(), radius, player, BIG_MARK_STROKE_WIDTH, 230);
                }
                MetaCell::Drawn => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "N",
                        egui::FontId::proportional(radius * 1.6),
                        DRAWN_MARK,
                    );
                }
                MetaCell::Open => {}
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        let rect = Rect::from_center_size(self.move_to_screen(mv), Vec2::splat(self.cell_size - 4.0));
        painter.rect_stroke(
            rect,
            CornerRadius::same(3),
            Stroke::new(2.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    /// Draw the meta-board line through the winning sub-boards
    fn draw_winning_line(&self, painter: &Painter, line: &[Coord; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.sub_board_rect(line[0]).center();
        let end = self.sub_board_rect(line[2]).center();
        painter.line_segment([start, end], stroke);

        for &pos in line {
            painter.rect_stroke(
                self.sub_board_rect(pos).shrink(2.0),
                CornerRadius::same(4),
                Stroke::new(3.0, WIN_HIGHLIGHT),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Player) {
        let center = self.move_to_screen(mv);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        draw_mark(painter, center, radius, turn, MARK_STROKE_WIDTH, 90);

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            TEXT_MUTED,
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, mv: Move, turn: Player, is_valid: bool) {
        let center = self.move_to_screen(mv);
        let rect = Rect::from_center_size(center, Vec2::splat(self.cell_size - 2.0));

        if is_valid {
            painter.rect_filled(rect, CornerRadius::same(2), hover_valid());
            draw_mark(painter, center, self.cell_size * MARK_RADIUS_RATIO, turn, MARK_STROKE_WIDTH, 110);
        } else {
            painter.rect_filled(rect, CornerRadius::same(2), hover_invalid());
        }
    }

    /// Convert screen coordinates to a move
    pub fn screen_to_move(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        Move::from_global(y.floor() as usize, x.floor() as usize).ok()
    }

    /// Center of a cell in screen coordinates
    pub fn move_to_screen(&self, mv: Move) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (mv.global_col() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (mv.global_row() as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    /// Screen area covered by one sub-board
    fn sub_board_rect(&self, pos: Coord) -> Rect {
        let span = GRID_SIZE as f32 * self.cell_size;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * span,
                BOARD_MARGIN + pos.row as f32 * span,
            );
        Rect::from_min_size(min, Vec2::splat(span))
    }
}

/// Draw an O as a ring and an X as a cross
fn draw_mark(painter: &Painter, center: Pos2, radius: f32, player: Player, width: f32, alpha: u8) {
    let base = match player {
        Player::O => O_MARK,
        Player::X => X_MARK,
    };
    let color = Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
    let stroke = Stroke::new(width, color);

    match player {
        Player::O => {
            painter.circle_stroke(center, radius, stroke);
        }
        Player::X => {
            let d = Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2 * 1.2);
            painter.line_segment([center - d, center + d], stroke);
            painter.line_segment([center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)], stroke);
        }
    }
}
