//! Operations and the update loop for the suggest input.

use super::model::Model;
use super::types::{HideSuggestionsMsg, Keyword, ValidateFunc};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Returns the current text value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text value, as if the user had typed it.
    ///
    /// The value is truncated to `char_limit`, the caret moves to the end,
    /// the highlight resets and the suggestion list is recomputed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_suggest::suggest::{new_with_keywords, Keyword};
    ///
    /// let mut input = new_with_keywords(vec![Keyword::new(1, "cat")]);
    /// input.set_value("ca");
    /// assert_eq!(input.value(), "ca");
    /// assert_eq!(input.suggestions().len(), 1);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        let mut chars: Vec<char> = s.chars().collect();
        if self.char_limit > 0 && chars.len() > self.char_limit {
            chars.truncate(self.char_limit);
        }
        self.err = self.validate_text(&chars);
        self.pos = chars.len();
        self.value = chars;
        self.refresh_suggestions();
    }

    /// Returns the caret position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the caret, clamping to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the caret to the start of the input.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the caret to the end of the input.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Returns whether the input currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input so it receives key events.
    ///
    /// Regaining focus re-reveals a previously computed suggestion list
    /// without recomputation, and discards any hide still pending from an
    /// earlier blur. The returned command starts the caret blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.hide_tag += 1;
        if !self.suggestions.is_empty() {
            self.visible = true;
        }
        self.cursor
            .focus()
            .unwrap_or_else(|| Box::pin(async { None }))
    }

    /// Removes focus and schedules the suggestion list to hide.
    ///
    /// The list stays on screen for `blur_hide_delay` so a selection click
    /// landing right after the blur still completes. The returned command
    /// delivers a [`HideSuggestionsMsg`]; route it back through `update`.
    pub fn blur(&mut self) -> Cmd {
        self.focus = false;
        self.cursor.blur();
        self.hide_tag += 1;
        let (id, tag) = (self.id, self.hide_tag);
        tick(self.blur_hide_delay, move |_| {
            Box::new(HideSuggestionsMsg { id, tag }) as Msg
        })
    }

    /// Clears the text and closes the suggestion list.
    pub fn clear(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.err = None;
        self.suggestions.clear();
        self.visible = false;
        self.highlight = None;
    }

    /// Replaces the keyword dataset and recomputes suggestions for the
    /// current text.
    pub fn set_keywords(&mut self, keywords: Vec<Keyword>) {
        self.keywords = keywords;
        self.refresh_suggestions();
    }

    /// Sets a validation hook applied to the text after every edit.
    pub fn set_validate(&mut self, validate: ValidateFunc) {
        self.validate = Some(validate);
    }

    /// Commits the suggestion at `index` into the input.
    ///
    /// This is the pointer-activation path: it works on any listed row
    /// regardless of the keyboard highlight. Returns the selected keyword,
    /// or `None` when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<Keyword> {
        let keyword = self.suggestions.get(index)?.clone();
        self.commit_selection(&keyword);
        Some(keyword)
    }

    fn commit_selection(&mut self, keyword: &Keyword) {
        self.value = keyword.text.chars().collect();
        self.err = self.validate_text(&self.value);
        self.pos = self.value.len();
        self.suggestions.clear();
        self.visible = false;
        self.highlight = None;
    }

    /// Moves the highlight to the next suggestion, wrapping to the first.
    /// No-op while the list is empty.
    pub(super) fn next_highlight(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.highlight = Some(match self.highlight {
            Some(i) if i >= last => 0,
            Some(i) => i + 1,
            None => 0,
        });
    }

    /// Moves the highlight to the previous suggestion, wrapping to the last.
    /// No-op while the list is empty.
    pub(super) fn prev_highlight(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.highlight = Some(match self.highlight {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Processes a message and updates the input state.
    ///
    /// Deferred hide messages are handled even while blurred; everything
    /// else requires focus. Key events go to the suggestion handlers first,
    /// then clear, then text editing.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(hide) = msg.downcast_ref::<HideSuggestionsMsg>() {
            // Idempotent: a selection that already emptied the list leaves
            // nothing to hide.
            if hide.id == self.id && hide.tag == self.hide_tag {
                self.visible = false;
            }
            return None;
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.handle_suggestion_keys(key_msg) {
                return None;
            }
            if matches_binding(key_msg, &self.key_map.clear) {
                self.clear();
                return None;
            }
            self.handle_movement_keys(key_msg);
            self.handle_deletion_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        self.cursor.update(&msg)
    }

    /// Handles suggestion navigation and confirmation.
    ///
    /// Returns true when the key was consumed.
    fn handle_suggestion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.next_suggestion) {
            // Directional keys never reach the text-editing handlers, even
            // when there is nothing to navigate.
            self.next_highlight();
            return true;
        }
        if matches_binding(key_msg, &self.key_map.prev_suggestion) {
            self.prev_highlight();
            return true;
        }
        if matches_binding(key_msg, &self.key_map.confirm_suggestion) {
            if let Some(i) = self.highlight {
                self.select(i);
                return true;
            }
            // With no highlight the confirm key is not consumed; the host
            // decides what it means for a bare input.
            return false;
        }
        false
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
                self.err = self.validate_text(&self.value);
                self.refresh_suggestions();
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward)
            && self.pos < self.value.len()
        {
            self.value.remove(self.pos);
            self.err = self.validate_text(&self.value);
            self.refresh_suggestions();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        // Plain characters only; shift is encoded in the char case.
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_chars(vec![ch]);
            }
        }
    }

    /// Inserts characters at the caret, honoring `char_limit`.
    pub(super) fn insert_chars(&mut self, chars: Vec<char>) {
        let mut avail = if self.char_limit > 0 {
            let space = self.char_limit.saturating_sub(self.value.len());
            if space == 0 {
                return;
            }
            Some(space)
        } else {
            None
        };

        let mut inserted = false;
        for ch in chars {
            self.value.insert(self.pos, ch);
            self.pos += 1;
            inserted = true;
            if let Some(ref mut space) = avail {
                *space -= 1;
                if *space == 0 {
                    break;
                }
            }
        }

        if inserted {
            self.err = self.validate_text(&self.value);
            self.refresh_suggestions();
        }
    }

    pub(super) fn validate_text(&self, chars: &[char]) -> Option<String> {
        if let Some(ref validate) = self.validate {
            let text: String = chars.iter().collect();
            validate(&text).err()
        } else {
            None
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(self.focus())
    }

    fn blur(&mut self) -> Option<Cmd> {
        Some(self.blur())
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
