//! Screen flow for the terminal game.
//!
//! `App` is a pure state machine: it consumes key presses, drives the
//! [`GameState`] and renders the current screen into a framebuffer. The
//! binary only owns the terminal.

use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};

use crate::core::{GameState, RoundStatus, Rules, Turn};
use crate::input::{should_exit, BindingSlot, KeyBindings};
use crate::term::{BoardView, FrameBuffer, MenuScreen, Overlay, SidePanel, Viewport, OVERVIEW};
use crate::types::GameAction;

/// Which screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// 1 play, 2 quit, 3 settings
    Menu,
    /// 1 WASD, 2 ESDF, 3 custom, Esc back
    Settings,
    /// Capturing five keys in [`BindingSlot::ALL`] order
    CustomBinding,
    Playing,
    /// Quit key pressed mid-round; y/n
    ConfirmQuit,
    /// Winning tile made; continue, exit, or settings
    Won,
    /// Round finished; any key returns to the menu
    RoundOver,
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App {
    screen: Screen,
    game: GameState,
    keys: KeyBindings,
    high_score: u32,
    /// Keys captured so far on the custom binding screen.
    capture: Vec<char>,
    /// Screen to go back to when settings are closed.
    settings_return: Screen,
    message: Option<String>,
    view: BoardView,
}

impl App {
    pub fn new(seed: u64, rules: Rules, keys: KeyBindings) -> Self {
        Self::with_game(GameState::new(seed, rules), keys)
    }

    /// Wrap an existing round. The screen follows its status, so a round
    /// that has not started opens on the menu.
    pub fn with_game(game: GameState, keys: KeyBindings) -> Self {
        let mut app = Self {
            screen: Screen::Menu,
            game,
            keys,
            high_score: 0,
            capture: Vec::with_capacity(BindingSlot::ALL.len()),
            settings_return: Screen::Menu,
            message: None,
            view: BoardView::default(),
        };
        app.after_turn();
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn keys(&self) -> KeyBindings {
        self.keys
    }

    /// Best round score this session.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_exit(key) {
            return Flow::Exit;
        }

        match self.screen {
            Screen::Menu => return self.on_menu(key),
            Screen::Settings => self.on_settings(key),
            Screen::CustomBinding => self.on_custom_binding(key),
            Screen::Playing => self.on_playing(key),
            Screen::ConfirmQuit => self.on_confirm_quit(key),
            Screen::Won => self.on_won(key),
            Screen::RoundOver => self.screen = Screen::Menu,
        }
        Flow::Continue
    }

    fn on_menu(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('1') | KeyCode::Enter => self.play(),
            KeyCode::Char('2') | KeyCode::Esc => {
                info!("exiting, best score {}", self.high_score);
                return Flow::Exit;
            }
            KeyCode::Char('3') => self.open_settings(),
            _ => {}
        }
        Flow::Continue
    }

    fn play(&mut self) {
        if self.game.status() == RoundStatus::NotStarted {
            self.game.start();
        } else {
            self.game.restart();
        }
        self.message = None;
        self.screen = Screen::Playing;
        self.after_turn();
    }

    fn open_settings(&mut self) {
        self.settings_return = self.screen;
        self.message = None;
        self.screen = Screen::Settings;
    }

    fn close_settings(&mut self) {
        self.screen = self.settings_return;
    }

    fn on_settings(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => self.set_keys(KeyBindings::WASD),
            KeyCode::Char('2') => self.set_keys(KeyBindings::ESDF),
            KeyCode::Char('3') => {
                self.capture.clear();
                self.message = None;
                self.screen = Screen::CustomBinding;
            }
            KeyCode::Esc => self.close_settings(),
            _ => {}
        }
    }

    fn set_keys(&mut self, keys: KeyBindings) {
        debug!("key bindings set to {}", keys);
        self.keys = keys;
        self.message = Some(format!("Using key binding {}", keys));
        self.close_settings();
    }

    fn on_custom_binding(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.capture.clear();
                self.screen = Screen::Settings;
            }
            KeyCode::Backspace => {
                self.capture.pop();
            }
            KeyCode::Char(c) => {
                self.capture.push(c);
                if self.capture.len() < BindingSlot::ALL.len() {
                    return;
                }
                match KeyBindings::from_keys(&self.capture) {
                    Ok(keys) => {
                        self.capture.clear();
                        self.set_keys(keys);
                    }
                    Err(err) => {
                        debug!("custom bindings rejected: {}", err);
                        self.capture.clear();
                        self.message = Some(format!("{}; try again", err));
                    }
                }
            }
            _ => {}
        }
    }

    fn on_playing(&mut self, key: KeyEvent) {
        match self.keys.action_for(key) {
            Some(GameAction::Move(direction)) => {
                if let Turn::Moved { .. } = self.game.apply_move(direction) {
                    self.after_turn();
                }
            }
            Some(GameAction::Quit) => self.screen = Screen::ConfirmQuit,
            None => {}
        }
    }

    fn on_confirm_quit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.game.quit();
                self.after_turn();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.screen = Screen::Playing;
            }
            _ => {}
        }
    }

    fn on_won(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('1') => {
                self.game.continue_after_win();
                self.after_turn();
            }
            KeyCode::Char('x') | KeyCode::Char('2') => {
                self.game.quit();
                self.after_turn();
            }
            KeyCode::Char('3') => self.open_settings(),
            _ => {}
        }
    }

    /// Follow the round status to the matching screen.
    fn after_turn(&mut self) {
        self.screen = match self.game.status() {
            RoundStatus::NotStarted => Screen::Menu,
            RoundStatus::Playing => Screen::Playing,
            RoundStatus::Won => Screen::Won,
            RoundStatus::Lost | RoundStatus::Ended | RoundStatus::Quit => {
                self.high_score = self.high_score.max(self.game.score());
                Screen::RoundOver
            }
        };
    }

    /// Render the current screen.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let overlay = match self.screen {
            Screen::Playing => Overlay::None,
            Screen::ConfirmQuit => Overlay::ConfirmQuit,
            Screen::Won => Overlay::Won,
            Screen::RoundOver if self.game.status() != RoundStatus::Quit => {
                Overlay::for_status(self.game.status())
            }
            _ => return self.menu_screen().render_into(viewport, fb),
        };

        let panel = SidePanel {
            best_score: self.high_score,
            keys: self.keys,
        };
        self.view
            .render_into(&self.game.snapshot(), &panel, overlay, viewport, fb);
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }

    fn menu_screen(&self) -> MenuScreen {
        let screen = match self.screen {
            Screen::Settings => MenuScreen::new("Key Bindings")
                .line("1. w (up) a (left) s (down) d (right)")
                .line("2. e (up) s (left) d (down) f (right)")
                .line("3. Custom")
                .line("")
                .line(format!("Current: {}", self.keys))
                .footer("Esc: back"),
            Screen::CustomBinding => {
                let mut screen = MenuScreen::new("Custom Key Bindings");
                for (i, slot) in BindingSlot::ALL.iter().enumerate() {
                    let key = match self.capture.get(i) {
                        Some(c) => c.to_string(),
                        None if i == self.capture.len() => "_".to_string(),
                        None => String::new(),
                    };
                    screen = screen.line(format!("{:<6}{}", slot.as_str(), key));
                }
                screen.footer("Esc: back  Backspace: undo")
            }
            Screen::RoundOver => MenuScreen::new("Round Over")
                .line(format!("Total score: {}", self.game.score()))
                .line(format!("Best score:  {}", self.high_score))
                .footer("press any key"),
            _ => {
                let mut screen = MenuScreen::new("Main Menu").with_banner();
                for line in OVERVIEW {
                    screen = screen.line(line);
                }
                screen = screen
                    .line("")
                    .line("1. Play Game")
                    .line("2. Quit")
                    .line("3. Game Settings");
                if self.high_score > 0 {
                    screen = screen.line("").line(format!("Best score: {}", self.high_score));
                }
                screen
            }
        };

        match &self.message {
            Some(message) => screen.footer(message.clone()),
            None => screen,
        }
    }
}
