//! Held-key repeat handler for terminal environments.
//!
//! A movement key fires once when pressed. While it stays held it repeats
//! after an initial delay, then faster once it has been held long enough.
//! Terminals that never report key release are handled with a timeout.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{
    GameAction, KEY_FAST_THRESHOLD_MS, KEY_REPEAT_DELAY_MS, KEY_REPEAT_FAST_INTERVAL_MS,
    KEY_REPEAT_INTERVAL_MS,
};

/// Repeat curve for held movement keys, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Hold time before the first repeat (exclusive)
    pub delay: u32,
    pub interval: u32,
    pub fast_interval: u32,
    /// Hold time after which `fast_interval` applies (exclusive)
    pub fast_threshold: u32,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            delay: KEY_REPEAT_DELAY_MS,
            interval: KEY_REPEAT_INTERVAL_MS,
            fast_interval: KEY_REPEAT_FAST_INTERVAL_MS,
            fast_threshold: KEY_FAST_THRESHOLD_MS,
        }
    }
}

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn action(self) -> Option<GameAction> {
        match self {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Hold state of one repeatable key.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held: bool,
    held_ms: u32,
    /// Time since the last repeat; `None` until the first one fires
    since_repeat_ms: Option<u32>,
}

impl HeldKey {
    /// Start holding; returns false if the key was already held
    fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        *self = Self {
            held: true,
            ..Self::default()
        };
        true
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    /// Advance the hold clock; returns true when a repeat is due.
    ///
    /// At most one repeat fires per call.
    fn advance(&mut self, elapsed_ms: u32, timing: &RepeatTiming) -> bool {
        if !self.held {
            return false;
        }

        self.held_ms = self.held_ms.saturating_add(elapsed_ms);
        if let Some(since) = self.since_repeat_ms.as_mut() {
            *since = since.saturating_add(elapsed_ms);
        }

        if self.held_ms <= timing.delay {
            return false;
        }

        let interval = if self.held_ms > timing.fast_threshold {
            timing.fast_interval
        } else {
            timing.interval
        };

        match self.since_repeat_ms {
            Some(since) if since < interval => false,
            _ => {
                self.since_repeat_ms = Some(0);
                true
            }
        }
    }
}

// Long enough to bridge the initial delay of OS key auto-repeat, which keeps
// refreshing the hold on terminals without release events.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

/// Tracks held movement keys and produces repeat actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    horizontal_key: HeldKey,
    down_key: HeldKey,
    timing: RepeatTiming,
    /// Time since the last movement key press
    idle_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_timing(RepeatTiming::default())
    }

    pub fn with_timing(timing: RepeatTiming) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            horizontal_key: HeldKey::default(),
            down_key: HeldKey::default(),
            timing,
            idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// Handle a key press and return the action to apply immediately, if any.
    ///
    /// Non-movement keys map straight through. A movement key that is
    /// already held returns `None` so terminal auto-repeat does not double up.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;

        let direction = match action {
            GameAction::MoveLeft => HorizontalDirection::Left,
            GameAction::MoveRight => HorizontalDirection::Right,
            GameAction::SoftDrop => {
                self.idle_ms = 0;
                return self.down_key.press().then_some(action);
            }
            _ => return Some(action),
        };

        self.idle_ms = 0;
        if self.horizontal != direction {
            // Switching sides restarts the hold
            self.horizontal = direction;
            self.horizontal_key.release();
        }
        self.horizontal_key.press().then_some(action)
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        match handle_key_event(key) {
            Some(GameAction::MoveLeft) if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal();
            }
            Some(GameAction::MoveRight) if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal();
            }
            Some(GameAction::SoftDrop) => self.down_key.release(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_key.release();
    }

    /// Advance hold timers by `elapsed_ms` and return any repeats that are due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 2> {
        let mut actions = ArrayVec::new();

        // Auto-release when the terminal does not emit release events.
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms {
            self.release_horizontal();
            self.down_key.release();
        }

        if self.horizontal_key.advance(elapsed_ms, &self.timing) {
            if let Some(action) = self.horizontal.action() {
                actions.push(action);
            }
        }
        if self.down_key.advance(elapsed_ms, &self.timing) {
            actions.push(GameAction::SoftDrop);
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.down_key.release();
        self.idle_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
