//! BoardView: maps a round snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid uses double-line box drawing with one row per tile and blank
//! empty cells:
//!
//! ```text
//! ╔══════╦══════╦══════╦══════╗
//! ║     2║      ║      ║     4║
//! ╠══════╬══════╬══════╬══════╣
//! ...
//! ╚══════╩══════╩══════╩══════╝
//! ```

use crate::core::{GameSnapshot, RoundStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::input::{BindingSlot, KeyBindings};
use crate::types::tile_exponent;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Message drawn across the middle of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Winning tile made; continue or exit
    Won,
    /// Board is dead
    Lost,
    /// Max tile reached
    Ended,
    /// Waiting for y/n after the quit key
    ConfirmQuit,
}

impl Overlay {
    /// Overlay implied by the round status alone.
    pub fn for_status(status: RoundStatus) -> Self {
        match status {
            RoundStatus::Won => Overlay::Won,
            RoundStatus::Lost => Overlay::Lost,
            RoundStatus::Ended => Overlay::Ended,
            RoundStatus::NotStarted | RoundStatus::Playing | RoundStatus::Quit => Overlay::None,
        }
    }

    fn lines(&self) -> &'static [&'static str] {
        match self {
            Overlay::None => &[],
            Overlay::Won => &["YOU WIN!", "c: continue  x: exit"],
            Overlay::Lost => &["GAME OVER", "press any key"],
            Overlay::Ended => &["MAX TILE!", "press any key"],
            Overlay::ConfirmQuit => &["QUIT ROUND?", "y / n"],
        }
    }
}

/// Session values shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePanel {
    pub best_score: u32,
    pub keys: KeyBindings,
}

const FRAME: Rgb = Rgb::new(187, 173, 160);
const BACKDROP: Rgb = Rgb::new(0, 0, 0);
const EMPTY_BG: Rgb = Rgb::new(60, 58, 50);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Tile backgrounds by exponent (2 -> index 1, ..., 2048 -> index 11).
const TILE_BG: [Rgb; 12] = [
    EMPTY_BG,
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// Beyond 2048.
const SUPER_TILE_BG: Rgb = Rgb::new(60, 58, 50);

/// Style for a tile value.
pub fn tile_style(value: u32) -> CellStyle {
    let exp = tile_exponent(value) as usize;
    let bg = TILE_BG.get(exp).copied().unwrap_or(SUPER_TILE_BG);
    let fg = if exp <= 2 { DARK_TEXT } else { LIGHT_TEXT };
    let style = CellStyle::new(fg, bg);
    if value == 0 {
        style
    } else {
        style.bold()
    }
}

/// A terminal renderer for the 2048 board.
pub struct BoardView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // Wide enough for 2^20, the largest tile a default round reaches.
        Self {
            tile_w: 7,
            tile_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the framed grid in terminal cells.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = n as u16;
        (n * (self.tile_w + 1) + 1, n * (self.tile_h + 1) + 1)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<const N: usize>(
        &self,
        snap: &GameSnapshot<N>,
        panel: &SidePanel,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(FRAME, BACKDROP));

        let (frame_w, frame_h) = self.frame_size(N);
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_grid::<N>(fb, start_x, start_y);
        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, panel, start_x + frame_w + 2, start_y);
        self.draw_overlay(fb, overlay, start_x, start_y, frame_w, frame_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<const N: usize>(
        &self,
        snap: &GameSnapshot<N>,
        panel: &SidePanel,
        overlay: Overlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, panel, overlay, viewport, &mut fb);
        fb
    }

    fn draw_grid<const N: usize>(&self, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let style = CellStyle::new(FRAME, BACKDROP);
        let (frame_w, _) = self.frame_size(N);
        let step_x = self.tile_w + 1;
        let step_y = self.tile_h + 1;

        for i in 0..=N as u16 {
            let y = y0 + i * step_y;
            let (left, mid, right) = if i == 0 {
                ('╔', '╦', '╗')
            } else if i == N as u16 {
                ('╚', '╩', '╝')
            } else {
                ('╠', '╬', '╣')
            };
            fb.fill_rect(x0, y, frame_w, 1, '═', style);
            for j in 0..=N as u16 {
                let ch = if j == 0 {
                    left
                } else if j == N as u16 {
                    right
                } else {
                    mid
                };
                fb.put_char(x0 + j * step_x, y, ch, style);
            }

            if i < N as u16 {
                for dy in 1..step_y {
                    for j in 0..=N as u16 {
                        fb.put_char(x0 + j * step_x, y + dy, '║', style);
                    }
                }
            }
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, row: u16, col: u16, value: u32) {
        let style = tile_style(value);
        let px = x0 + 1 + col * (self.tile_w + 1);
        let py = y0 + 1 + row * (self.tile_h + 1);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        if value != 0 {
            let text = value.to_string();
            fb.put_str_right(px + self.tile_w, py + self.tile_h / 2, &text, style);
        }
    }

    fn draw_side_panel<const N: usize>(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<N>,
        panel: &SidePanel,
        x: u16,
        y0: u16,
    ) {
        if x.saturating_add(PANEL_W) > fb.width() {
            return;
        }

        let label = CellStyle::new(LIGHT_TEXT, BACKDROP).bold();
        let value = CellStyle::new(FRAME, BACKDROP);

        let mut y = y0;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", panel.best_score.max(snap.score)),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, &v.to_string(), value);
            y += 3;
        }

        if let Some(last) = snap.last_move {
            let end = fb.put_str(x, y, last.direction.as_str(), value);
            if last.score > 0 {
                fb.put_str(end + 1, y, &format!("+{}", last.score), label);
            }
        }
        y += 2;

        fb.put_str(x, y, "KEYS", label);
        y += 1;
        for slot in BindingSlot::ALL {
            let line = format!("{:<6}{}", slot.as_str(), panel.keys.key(slot));
            fb.put_str(x, y, &line, value);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        overlay: Overlay,
        x0: u16,
        y0: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let lines = overlay.lines();
        if lines.is_empty() {
            return;
        }

        let style = CellStyle::new(LIGHT_TEXT, BACKDROP).bold();
        let box_w = lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let box_h = lines.len() as u16 + 2;
        let bx = x0 + frame_w.saturating_sub(box_w) / 2;
        let by = y0 + frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(bx, by, box_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(bx, box_w, by + 1 + i as u16, line, style);
        }
    }
}

/// Columns reserved for the side panel.
const PANEL_W: u16 = 16;
