//! Key mapping from terminal events to menu inputs.

use crate::types::MenuInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a menu input.
pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    if is_ctrl_c(key) {
        return MenuInput::Cancel;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter => MenuInput::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Cancel,
        KeyCode::Char(c) => MenuInput::Shortcut(c),
        _ => MenuInput::None,
    }
}

/// Check if key should stop a running animation.
pub fn should_stop(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || is_ctrl_c(key)
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Up)), MenuInput::Up);
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Down)), MenuInput::Down);
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('k'))),
            MenuInput::Up
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('j'))),
            MenuInput::Down
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Enter)),
            MenuInput::Confirm
        );
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Esc)), MenuInput::Cancel);
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('Q'))),
            MenuInput::Cancel
        );
        assert_eq!(
            map_menu_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuInput::Cancel
        );
    }

    #[test]
    fn test_shortcut_and_ignored_keys() {
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('S'))),
            MenuInput::Shortcut('S')
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('?'))),
            MenuInput::Shortcut('?')
        );
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Tab)), MenuInput::None);
    }

    #[test]
    fn test_stop_keys() {
        assert!(should_stop(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_stop(KeyEvent::from(KeyCode::Esc)));
        assert!(should_stop(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_stop(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_stop(KeyEvent::from(KeyCode::Char('c'))));
    }
}
