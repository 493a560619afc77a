//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(GameAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('y') => Some(GameAction::RotateCcw),

        // Ctrl-C quits; it must not also hold
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') => Some(GameAction::Hold),
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Char('r') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('H')] {
            assert_eq!(key(code), Some(GameAction::MoveLeft), "{:?}", code);
        }
        for code in [KeyCode::Right, KeyCode::Char('D'), KeyCode::Char('l')] {
            assert_eq!(key(code), Some(GameAction::MoveRight), "{:?}", code);
        }
        for code in [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('J')] {
            assert_eq!(key(code), Some(GameAction::SoftDrop), "{:?}", code);
        }
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('W')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('k')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('z')), Some(GameAction::RotateCcw));
        assert_eq!(key(KeyCode::Char('Y')), Some(GameAction::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(key(KeyCode::Char('c')), Some(GameAction::Hold));
        assert_eq!(key(KeyCode::Char('P')), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(handle_key_event(ctrl_c), None);
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
