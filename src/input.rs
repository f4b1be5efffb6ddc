use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::MapId;
use crate::game::{GameState, TickInput};

/// One-shot game actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Pause,
    Resume,
    Restart,
    Quit,
    SelectMap(MapId),
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire: bool,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before reading actions
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        // Clear previous one-shot actions
        self.oneshot_actions.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize events handled elsewhere
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Check for quit keys first (works in any state)
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        // State-specific one-shot actions
        match game_state {
            GameState::Playing => match key_event.code {
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.oneshot_actions.push(InputAction::Pause);
                    return;
                }
                KeyCode::Char('1') => {
                    self.oneshot_actions.push(InputAction::SelectMap(MapId::Meadow));
                    return;
                }
                KeyCode::Char('2') => {
                    self.oneshot_actions.push(InputAction::SelectMap(MapId::Desert));
                    return;
                }
                KeyCode::Char('3') => {
                    self.oneshot_actions.push(InputAction::SelectMap(MapId::City));
                    return;
                }
                _ => {}
            },
            GameState::Paused => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Resume);
                    return;
                }
            }
            GameState::GameOver => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                    return;
                }
            }
        }

        // Continuous action keys (only tracked in Playing state). Opposite
        // directions are deliberately NOT cleared: axes are independent and
        // simultaneous opposites simply cancel.
        if game_state == GameState::Playing {
            match key_event.code {
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    self.key_state.up = true;
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    self.key_state.down = true;
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                }
                // Fire keys
                KeyCode::Char(' ') | KeyCode::Char('j') | KeyCode::Char('J') => {
                    self.key_state.fire = true;
                }
                _ => {}
            }
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.up = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.key_state.down = false;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') | KeyCode::Char('j') | KeyCode::Char('J') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// The held-key snapshot for this frame's simulation tick.
    /// Must be called after poll_events()
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.key_state.up,
            down: self.key_state.down,
            left: self.key_state.left,
            right: self.key_state.right,
            fire: self.key_state.fire,
        }
    }

    /// One-shot actions collected by the last poll, in arrival order.
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }
}
