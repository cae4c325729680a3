//! Text screens: main menu, settings, key rebinding.
//!
//! Pure like [`crate::board_view`]; screens are plain data rendered centred in
//! the viewport.

use crate::board_view::Viewport;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const BANNER: [&str; 5] = [
    " ____   ___  _  _    ___  ",
    "|___ \\ / _ \\| || |  ( _ ) ",
    "  __) | | | | || |_ / _ \\ ",
    " / __/| |_| |__   _| (_) |",
    "|_____|\\___/   |_|  \\___/ ",
];

/// Rules shown under the banner on the main menu.
pub const OVERVIEW: [&str; 5] = [
    "Merge tiles to make 2048.",
    "Tiles slide up, down, left or right.",
    "Two equal tiles that collide merge into one.",
    "A 2 or 4 lands on an empty cell after each move.",
    "No empty cell and no merge left: game over.",
];

const TITLE: CellStyle = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const DIM: CellStyle = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));

/// A titled list of lines with an optional footer (status or error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuScreen {
    pub title: String,
    pub lines: Vec<String>,
    pub footer: Option<String>,
    pub banner: bool,
}

impl MenuScreen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_banner(mut self) -> Self {
        self.banner = true;
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    fn height(&self) -> u16 {
        let banner = if self.banner { BANNER.len() + 1 } else { 0 };
        let footer = if self.footer.is_some() { 2 } else { 0 };
        (banner + 2 + self.lines.len() + footer) as u16
    }

    fn width(&self) -> u16 {
        let banner = if self.banner { BANNER[0].len() } else { 0 };
        self.lines
            .iter()
            .chain(std::iter::once(&self.title))
            .chain(self.footer.iter())
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(banner) as u16
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(BODY);

        let w = self.width();
        let x = viewport.width.saturating_sub(w) / 2;
        let mut y = viewport.height.saturating_sub(self.height()) / 2;

        if self.banner {
            for row in BANNER {
                fb.put_str_centered(x, w, y, row, TITLE);
                y += 1;
            }
            y += 1;
        }

        fb.put_str(x, y, &self.title, TITLE);
        y += 2;
        for line in &self.lines {
            fb.put_str(x, y, line, BODY);
            y += 1;
        }
        if let Some(footer) = &self.footer {
            fb.put_str(x, y + 1, footer, DIM);
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}
