//! Key mapping from terminal events to game actions.
//!
//! Bindings are a fixed set of five keys (four directions plus quit) chosen
//! from a preset or validated once from user input. Arrow keys always move,
//! whatever the bindings, and Ctrl-C always exits the program.

use std::fmt;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::types::{Direction, GameAction};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("key {0:?} is bound to more than one action")]
    Duplicate(char),

    #[error("key {0:?} cannot be bound")]
    Unbindable(char),

    #[error("expected 5 keys (up, left, down, right, quit), got {0}")]
    WrongCount(usize),
}

/// The five bindable actions, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSlot {
    Up,
    Left,
    Down,
    Right,
    Quit,
}

impl BindingSlot {
    pub const ALL: [BindingSlot; 5] = [
        BindingSlot::Up,
        BindingSlot::Left,
        BindingSlot::Down,
        BindingSlot::Right,
        BindingSlot::Quit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BindingSlot::Up => "up",
            BindingSlot::Left => "left",
            BindingSlot::Down => "down",
            BindingSlot::Right => "right",
            BindingSlot::Quit => "quit",
        }
    }

    pub fn action(&self) -> GameAction {
        match self {
            BindingSlot::Up => GameAction::Move(Direction::Up),
            BindingSlot::Left => GameAction::Move(Direction::Left),
            BindingSlot::Down => GameAction::Move(Direction::Down),
            BindingSlot::Right => GameAction::Move(Direction::Right),
            BindingSlot::Quit => GameAction::Quit,
        }
    }
}

/// Validated key bindings. Letters match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBindings {
    up: char,
    left: char,
    down: char,
    right: char,
    quit: char,
}

impl KeyBindings {
    /// w (up) a (left) s (down) d (right) q (quit)
    pub const WASD: KeyBindings = KeyBindings {
        up: 'w',
        left: 'a',
        down: 's',
        right: 'd',
        quit: 'q',
    };

    /// e (up) s (left) d (down) f (right) q (quit)
    pub const ESDF: KeyBindings = KeyBindings {
        up: 'e',
        left: 's',
        down: 'd',
        right: 'f',
        quit: 'q',
    };

    /// Build custom bindings, rejecting duplicates and unprintable keys.
    ///
    /// ```
    /// use twenty48_input::KeyBindings;
    ///
    /// assert!(KeyBindings::new('i', 'j', 'k', 'l', 'x').is_ok());
    /// assert!(KeyBindings::new('i', 'j', 'k', 'J', 'x').is_err());
    /// ```
    pub fn new(
        up: char,
        left: char,
        down: char,
        right: char,
        quit: char,
    ) -> Result<Self, BindingError> {
        let mut seen: ArrayVec<char, 5> = ArrayVec::new();
        for key in [up, left, down, right, quit] {
            if key.is_control() || key.is_whitespace() {
                return Err(BindingError::Unbindable(key));
            }
            let key = normalize(key);
            if seen.contains(&key) {
                return Err(BindingError::Duplicate(key));
            }
            seen.push(key);
        }
        Ok(Self {
            up: seen[0],
            left: seen[1],
            down: seen[2],
            right: seen[3],
            quit: seen[4],
        })
    }

    /// Build bindings from keys in [`BindingSlot::ALL`] order.
    pub fn from_keys(keys: &[char]) -> Result<Self, BindingError> {
        match *keys {
            [up, left, down, right, quit] => Self::new(up, left, down, right, quit),
            _ => Err(BindingError::WrongCount(keys.len())),
        }
    }

    /// Key bound to a slot
    pub fn key(&self, slot: BindingSlot) -> char {
        match slot {
            BindingSlot::Up => self.up,
            BindingSlot::Left => self.left,
            BindingSlot::Down => self.down,
            BindingSlot::Right => self.right,
            BindingSlot::Quit => self.quit,
        }
    }

    /// Map a key press to a game action.
    pub fn action_for(&self, key: KeyEvent) -> Option<GameAction> {
        match key.code {
            KeyCode::Up => Some(GameAction::Move(Direction::Up)),
            KeyCode::Down => Some(GameAction::Move(Direction::Down)),
            KeyCode::Left => Some(GameAction::Move(Direction::Left)),
            KeyCode::Right => Some(GameAction::Move(Direction::Right)),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let c = normalize(c);
                BindingSlot::ALL
                    .into_iter()
                    .find(|&slot| self.key(slot) == c)
                    .map(|slot| slot.action())
            }
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::WASD
    }
}

/// `up: w  left: a  down: s  right: d  quit: q`
impl fmt::Display for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in BindingSlot::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{}: {}", slot.as_str(), self.key(*slot))?;
        }
        Ok(())
    }
}

fn normalize(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Check if key should exit the program outright.
pub fn should_exit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
