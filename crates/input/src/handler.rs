//! Soft-drop aware input handler for terminal environments.
//!
//! Fast drop lasts while the down key is held. Terminals only report key
//! releases with keyboard enhancement enabled, so without them the hold ends
//! after a short timeout since the last press or auto-repeat.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_soft_drop_key};
use crate::types::{GameAction, SOFT_DROP_RELEASE_MS};

/// Tracks the held soft-drop key and turns key events into actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    down_held: bool,
    /// Milliseconds since the last down-key press or repeat
    down_idle_ms: u32,
    release_timeout_ms: u32,
    /// Set once the terminal has reported any key release
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(SOFT_DROP_RELEASE_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            down_held: false,
            down_idle_ms: 0,
            release_timeout_ms,
            release_events: false,
        }
    }

    pub fn soft_drop_held(&self) -> bool {
        self.down_held
    }

    /// Translate one key event.
    ///
    /// Auto-repeat only re-triggers horizontal movement and keeps soft drop
    /// alive; rotation, hard drop, pause and restart fire on the first press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Release => {
                self.release_events = true;
                if is_soft_drop_key(key.code) {
                    return self.release_soft_drop();
                }
                None
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if is_soft_drop_key(key.code) {
                    self.down_idle_ms = 0;
                    if self.down_held {
                        return None;
                    }
                    self.down_held = true;
                    return Some(GameAction::SoftDrop);
                }

                let action = handle_key_event(key)?;
                match (key.kind, action) {
                    (KeyEventKind::Repeat, GameAction::MoveLeft | GameAction::MoveRight) => Some(action),
                    (KeyEventKind::Repeat, _) => None,
                    _ => Some(action),
                }
            }
        }
    }

    /// Advance the release timeout. Returns [`GameAction::SoftDropRelease`]
    /// when a held soft drop times out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.down_held || self.release_events {
            return None;
        }

        self.down_idle_ms = self.down_idle_ms.saturating_add(elapsed_ms);
        if self.down_idle_ms > self.release_timeout_ms {
            return self.release_soft_drop();
        }
        None
    }

    /// Forget any held key (used on restart and pause).
    pub fn reset(&mut self) {
        self.down_held = false;
        self.down_idle_ms = 0;
    }

    fn release_soft_drop(&mut self) -> Option<GameAction> {
        if !self.down_held {
            return None;
        }
        self.reset();
        Some(GameAction::SoftDropRelease)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
