//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] through validated,
//! user-configurable key bindings.

pub mod map;

pub use twenty48_types as types;

pub use map::{should_exit, BindingError, BindingSlot, KeyBindings};
