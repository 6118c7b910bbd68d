//! Key bindings for the suggest input component.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the set of key bindings for editing the input and acting on the
/// suggestion list.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the text caret one character right.
    pub character_forward: Binding,
    /// Move the text caret one character left.
    pub character_backward: Binding,
    /// Move the text caret to the start of the input.
    pub line_start: Binding,
    /// Move the text caret to the end of the input.
    pub line_end: Binding,
    /// Delete the character before the caret.
    pub delete_character_backward: Binding,
    /// Delete the character under the caret.
    pub delete_character_forward: Binding,
    /// Move the highlight to the next suggestion, wrapping to the first.
    pub next_suggestion: Binding,
    /// Move the highlight to the previous suggestion, wrapping to the last.
    pub prev_suggestion: Binding,
    /// Commit the highlighted suggestion into the input.
    pub confirm_suggestion: Binding,
    /// Clear the input and close the suggestion list.
    pub clear: Binding,
}

/// The default key bindings for the suggest input.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        next_suggestion: new_binding(vec![
            with_keys_str(&["down", "ctrl+n"]),
            with_help("↓", "next suggestion"),
        ]),
        prev_suggestion: new_binding(vec![
            with_keys_str(&["up", "ctrl+p"]),
            with_help("↑", "previous suggestion"),
        ]),
        confirm_suggestion: new_binding(vec![
            with_keys_str(&["enter"]),
            with_help("enter", "select suggestion"),
        ]),
        clear: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "clear")]),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_suggestion,
            &self.prev_suggestion,
            &self.confirm_suggestion,
            &self.clear,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.next_suggestion,
                &self.prev_suggestion,
                &self.confirm_suggestion,
                &self.clear,
            ],
            vec![
                &self.character_forward,
                &self.character_backward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
            ],
        ]
    }
}
