//! Key bindings for the textfield component.

use crate::key::Binding;
use crossterm::event::{KeyCode, KeyModifiers};

/// KeyMap is the key bindings for actions within the textfield.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Commit the current value.
    pub commit: Binding,
    /// Clear the value (clearable fields only).
    pub clear: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete the whole value.
    pub delete_line: Binding,
}

/// The default set of key bindings for the textfield.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit"),
        clear: Binding::new(vec![(KeyCode::Char('x'), KeyModifiers::CONTROL)])
            .with_help("ctrl+x", "clear"),
        paste: Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)])
            .with_help("ctrl+v", "paste"),
        delete_character_backward: Binding::new(vec![
            (KeyCode::Backspace, KeyModifiers::NONE),
            (KeyCode::Char('h'), KeyModifiers::CONTROL),
        ])
        .with_help("backspace", "delete"),
        delete_line: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)])
            .with_help("ctrl+u", "delete all"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}
