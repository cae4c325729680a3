//! Terminal rendering for 2048.
//!
//! Screens are rendered into a plain framebuffer by pure view types, then
//! flushed to the terminal with crossterm. Only changed cells are rewritten
//! after the first frame.

pub mod board_view;
pub mod fb;
pub mod menu_view;
pub mod renderer;

pub use twenty48_core as core;
pub use twenty48_input as input;
pub use twenty48_types as types;

pub use board_view::{tile_style, AnchorY, BoardView, Overlay, SidePanel, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use menu_view::{MenuScreen, OVERVIEW};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
