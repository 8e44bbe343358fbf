//! Theme constants for the Ultimate Tic-Tac-Toe GUI

use egui::Color32;

// Board colors - paper tones
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 140, 125);
pub const MACRO_LINE: Color32 = Color32::from_rgb(45, 40, 35);

// Marks
pub const O_MARK: Color32 = Color32::from_rgb(215, 60, 60);
pub const X_MARK: Color32 = Color32::from_rgb(40, 150, 190);
pub const DRAWN_MARK: Color32 = Color32::from_rgb(90, 170, 90);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 170, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn active_board_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 210, 80, 70)
}

pub fn resolved_board_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 170)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const MARK_STROKE_WIDTH: f32 = 3.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MACRO_LINE_WIDTH: f32 = 4.0;
pub const BIG_MARK_STROKE_WIDTH: f32 = 8.0;
