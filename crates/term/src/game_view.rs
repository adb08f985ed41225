//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::time::Duration;

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{FoodKind, Position, GRID_HEIGHT, GRID_WIDTH, WIN_LENGTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Field frame including the wall ring.
const FRAME_W: u16 = GRID_WIDTH as u16 + 2;
const FRAME_H: u16 = GRID_HEIGHT as u16 + 2;
/// Side panel column, relative to the layout origin.
const PANEL_X: u16 = GRID_WIDTH as u16 + 5;
/// Win progress bar column and width.
const BAR_X: u16 = GRID_WIDTH as u16 + 10;
const BAR_LEN: u16 = 20;
/// Full layout: field frame, side panel, one help line under the frame.
const LAYOUT_W: u16 = BAR_X + BAR_LEN;
const LAYOUT_H: u16 = FRAME_H + 1;

const GREEN: Rgb = Rgb::new(100, 220, 120);
const RED: Rgb = Rgb::new(220, 80, 80);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const CYAN: Rgb = Rgb::new(80, 220, 220);
const BLUE: Rgb = Rgb::new(80, 120, 220);
const MAGENTA: Rgb = Rgb::new(200, 120, 220);
const WHITE: Rgb = Rgb::new(255, 255, 255);

const TITLE_ART: [&str; 6] = [
    r"   _____ _   _          _  _______ ",
    r"  / ____| \ | |   /\   | |/ /  ____|",
    r" | (___ |  \| |  /  \  | ' /| |__   ",
    r"  \___ \| . ` | / /\ \ |  < |  __|  ",
    r"  ____) | |\  |/ ____ \| . \| |____ ",
    r" |_____/|_| \_/_/    \_\_|\_\______|",
];

const GAME_OVER_ART: [&str; 10] = [
    r"   ____    _    __  __ _____ ",
    r"  / ___|  / \  |  \/  | ____|",
    r" | |  _  / _ \ | |\/| |  _|  ",
    r" | |_| |/ ___ \| |  | | |___ ",
    r"  \____/_/   \_\_|  |_|_____|",
    r"   _____     _______ ____  _ ",
    r"  / _ \ \   / / ____|  _ \| |",
    r" | | | \ \ / /|  _| | |_) | |",
    r" | |_| |\ V / | |___|  _ <|_|",
    r"  \___/  \_/  |_____|_| \_(_)",
];

const VICTORY_ART: [&str; 4] = [
    r"__   __ ___   _   _  __      __ ___  _  _ _ ",
    r"\ \ / // _ \ | | | | \ \    / /|_ _|| \| | |",
    r" \ V /| (_) || |_| |  \ \/\/ /  | | | .` |_|",
    r"  |_|  \___/  \___/    \_/\_/  |___||_|\_(_)",
];

/// A lightweight terminal view for the snake game.
///
/// Everything is drawn relative to a fixed 70x23 layout (field frame, side
/// panel, help line) centered in the viewport. Small terminals clip at the
/// framebuffer edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the running game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes. `now`
    /// drives the speed boost indicator.
    pub fn render_into(
        &self,
        game: &GameState,
        now: Duration,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let start_x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_H) / 2;

        self.draw_field_frame(fb, start_x, start_y);

        // Snake: '@' head, 'o' body.
        let body = style(GREEN, true);
        for (i, &pos) in game.snake.segments().iter().enumerate() {
            let ch = if i == 0 { '@' } else { 'o' };
            self.draw_cell(fb, start_x, start_y, pos, ch, body);
        }

        if let Some(food) = game.food {
            let (ch, fg) = food_glyph(food.kind);
            self.draw_cell(fb, start_x, start_y, food.position, ch, style(fg, true));
        }

        let obstacle = style(MAGENTA, true);
        for &pos in game.obstacles.positions() {
            self.draw_cell(fb, start_x, start_y, pos, 'X', obstacle);
        }

        self.draw_side_panel(fb, game, now, start_x, start_y);
        self.draw_help_line(fb, start_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, now: Duration, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, now, viewport, &mut fb);
        fb
    }

    /// Title screen shown before the first tick.
    pub fn render_welcome_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let start_x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_H) / 2;

        let title = style(WHITE, true);
        for (i, line) in TITLE_ART.iter().enumerate() {
            fb.put_str(start_x + 5, start_y + 3 + i as u16, line, title);
        }

        let plain = CellStyle::default();
        let x = fb.put_str(start_x + 2, start_y + 12, "GOAL: Grow to ", plain);
        let x = fb.put_u32(x, start_y + 12, WIN_LENGTH as u32, plain);
        fb.put_str(x, start_y + 12, " length to WIN!", plain);

        fb.put_str(start_x + 5, start_y + 14, "CONTROLS:", plain);
        fb.put_str(start_x + 5, start_y + 15, "  Arrow Keys - Move", plain);
        fb.put_str(start_x + 5, start_y + 16, "  Q - Quit", plain);

        fb.put_str(start_x + 5, start_y + 18, "SPECIAL APPLES:", plain);
        fb.put_str(start_x + 5, start_y + 19, "  * Red", style(RED, false));
        fb.put_str(start_x + 14, start_y + 19, "- Normal (+1, +10pts)", plain);
        fb.put_str(start_x + 5, start_y + 20, "  $ Green", style(GREEN, false));
        fb.put_str(start_x + 14, start_y + 20, "- Big (+2, +20pts)", plain);
        fb.put_str(start_x + 5, start_y + 21, "  @ Gold", style(YELLOW, false));
        fb.put_str(start_x + 14, start_y + 21, "- Speed x2 for 3s (+50pts)", plain);
        fb.put_str(start_x + 5, start_y + 22, "  # Blue", style(BLUE, false));
        fb.put_str(start_x + 14, start_y + 22, "- Adds obstacle (+15pts)", plain);

        fb.put_str(start_x + 5, start_y + 17, "Press ANY KEY to start...", title);
    }

    /// Final screen for a lost episode.
    pub fn render_game_over_into(
        &self,
        game: &GameState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let start_x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_H) / 2;

        let red = style(RED, true);
        for (i, line) in GAME_OVER_ART.iter().enumerate() {
            fb.put_str(start_x + 8, start_y + 1 + i as u16, line, red);
        }

        let info = style(CYAN, true);
        let col = start_x + 10;
        let x = fb.put_str(col, start_y + 13, "FINAL SCORE: ", info);
        fb.put_u32(x, start_y + 13, game.score(), info);
        let x = fb.put_str(col, start_y + 14, "FINAL LENGTH: ", info);
        let x = fb.put_u32(x, start_y + 14, game.snake.len() as u32, info);
        let x = fb.put_str(x, start_y + 14, "/", info);
        fb.put_u32(x, start_y + 14, WIN_LENGTH as u32, info);
        let x = fb.put_str(col, start_y + 15, "APPLES EATEN: ", info);
        fb.put_u32(x, start_y + 15, game.apples_eaten(), info);

        fb.put_str(col, start_y + 17, "Apple Breakdown:", style(CYAN, false));
        let breakdown = [
            (12, 18, "Red: ", RED, FoodKind::Regular),
            (20, 18, "Green: ", GREEN, FoodKind::Green),
            (12, 19, "Gold: ", YELLOW, FoodKind::Gold),
            (20, 19, "Blue: ", BLUE, FoodKind::Blue),
        ];
        for (dx, dy, label, fg, kind) in breakdown {
            let eaten = game.apples_of(kind);
            self.draw_kind_count(fb, start_x + dx, start_y + dy, label, fg, eaten);
        }

        fb.put_str(start_x + 5, start_y + 21, "Press any key to exit...", style(YELLOW, true));
    }

    /// Final screen for a won episode.
    pub fn render_victory_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let start_x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_H) / 2;

        let gold = style(YELLOW, true);
        for (i, line) in VICTORY_ART.iter().enumerate() {
            fb.put_str(start_x + 5, start_y + 4 + i as u16, line, gold);
        }

        let title = style(WHITE, true);
        let x = fb.put_str(start_x, start_y + 9, "CONGRATULATIONS! You reached ", title);
        let x = fb.put_u32(x, start_y + 9, WIN_LENGTH as u32, title);
        fb.put_str(x, start_y + 9, " length!", title);

        let info = style(CYAN, true);
        let col = start_x + 10;
        let x = fb.put_str(col, start_y + 11, "FINAL SCORE: ", info);
        fb.put_u32(x, start_y + 11, game.score(), info);
        let x = fb.put_str(col, start_y + 12, "APPLES EATEN: ", info);
        fb.put_u32(x, start_y + 12, game.apples_eaten(), info);
        let x = fb.put_str(col, start_y + 13, "OBSTACLES CREATED: ", info);
        fb.put_u32(x, start_y + 13, game.obstacles.len() as u32, info);

        fb.put_str(col, start_y + 15, "Apple Collection:", CellStyle::default());
        let collection = [
            ("  Red: ", RED, FoodKind::Regular),
            ("  Green: ", GREEN, FoodKind::Green),
            ("  Gold: ", YELLOW, FoodKind::Gold),
            ("  Blue: ", BLUE, FoodKind::Blue),
        ];
        for (i, (label, fg, kind)) in collection.into_iter().enumerate() {
            let y = start_y + 16 + i as u16;
            self.draw_kind_count(fb, col, y, label, fg, game.apples_of(kind));
        }

        fb.put_str(start_x + 5, start_y + 21, "Press any key to exit...", gold);
    }

    fn draw_field_frame(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let frame = style(YELLOW, true);
        let right = start_x + FRAME_W - 1;
        let bottom = start_y + FRAME_H - 1;

        for x in start_x..=right {
            fb.put_char(x, start_y, '=', frame);
            fb.put_char(x, bottom, '=', frame);
        }
        for y in start_y + 1..bottom {
            fb.put_char(start_x, y, '|', frame);
            fb.put_char(right, y, '|', frame);
        }

        fb.put_char(start_x, start_y, '+', frame);
        fb.put_char(right, start_y, '+', frame);
        fb.put_char(start_x, bottom, '+', frame);
        fb.put_char(right, bottom, '+', frame);
    }

    /// Draw one grid cell. Grid (x, y) maps straight onto the layout since
    /// the wall ring occupies column 0 and row 0.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        fb.put_char(start_x + pos.x as u16, start_y + pos.y as u16, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        now: Duration,
        start_x: u16,
        start_y: u16,
    ) {
        let panel_x = start_x + PANEL_X;
        let title = style(WHITE, true);
        let info = style(CYAN, true);
        let plain = CellStyle::default();

        fb.put_str(panel_x, start_y, "[ SNAKE GAME ]", title);

        let x = fb.put_str(panel_x, start_y + 2, "SCORE: ", info);
        fb.put_u32(x, start_y + 2, game.score(), info);

        let x = fb.put_str(panel_x, start_y + 3, "LENGTH: ", info);
        let x = fb.put_u32(x, start_y + 3, game.snake.len() as u32, info);
        let x = fb.put_str(x, start_y + 3, "/", info);
        fb.put_u32(x, start_y + 3, WIN_LENGTH as u32, info);

        let x = fb.put_str(panel_x, start_y + 4, "APPLES: ", info);
        fb.put_u32(x, start_y + 4, game.apples_eaten(), info);

        // Progress toward the win length.
        fb.put_str(panel_x, start_y + 5, "WIN:", plain);
        let bar = style(WHITE, false);
        let progress = (game.snake.len() * BAR_LEN as usize / WIN_LENGTH) as u16;
        for i in 0..BAR_LEN {
            let ch = if i < progress { '=' } else { '-' };
            fb.put_char(start_x + BAR_X + i, start_y + 5, ch, bar);
        }

        if game.speed_boost.is_active(now) {
            let boost = CellStyle {
                fg: YELLOW,
                bg: Rgb::new(0, 0, 0),
                bold: true,
                blink: true,
            };
            fb.put_str(panel_x, start_y + 7, ">>> SPEED x2 <<<", boost);
        }

        fb.put_str(panel_x, start_y + 9, "--- APPLES ---", plain);
        fb.put_str(panel_x, start_y + 10, "* Red: +1 +10pts", style(RED, true));
        fb.put_str(panel_x, start_y + 11, "$ Green: +2 +20pts", style(GREEN, true));
        fb.put_str(panel_x, start_y + 12, "@ Gold: Speed x2", style(YELLOW, true));
        fb.put_str(panel_x, start_y + 13, "# Blue: +Wall", style(BLUE, true));
    }

    fn draw_help_line(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let info = style(CYAN, false);
        let y = start_y + FRAME_H;
        let x = fb.put_str(start_x, y, "Arrow Keys: Move | Q: Quit | Get to ", info);
        let x = fb.put_u32(x, y, WIN_LENGTH as u32, info);
        fb.put_str(x, y, " length to WIN!", info);
    }

    fn draw_kind_count(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        label: &str,
        fg: Rgb,
        count: u32,
    ) {
        let s = style(fg, false);
        let x = fb.put_str(x, y, label, s);
        fb.put_u32(x, y, count, s);
    }
}

fn style(fg: Rgb, bold: bool) -> CellStyle {
    CellStyle {
        fg,
        bg: Rgb::new(0, 0, 0),
        bold,
        blink: false,
    }
}

fn food_glyph(kind: FoodKind) -> (char, Rgb) {
    match kind {
        FoodKind::Regular => ('*', RED),
        FoodKind::Green => ('$', GREEN),
        FoodKind::Gold => ('@', YELLOW),
        FoodKind::Blue => ('#', BLUE),
    }
}
