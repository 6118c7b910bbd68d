//! Caret sub-component for the suggest input.
//!
//! Renders the character under the text caret, optionally blinking. The
//! cursor is embedded inside the input model and updated by forwarding
//! messages to it; it is not a standalone program.
//!
//! ### Example
//! ```rust
//! use bubbletea_suggest::cursor;
//! use lipgloss_extras::prelude::*;
//!
//! let mut cur = cursor::new();
//! cur.style = Style::new().reverse(true);
//! let _ = cur.focus(); // start blinking
//! cur.set_char("a");
//! assert!(!cur.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Each cursor gets a process-unique id so blink messages from one instance
// are never consumed by another.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that toggles the caret's blink phase.
///
/// The `id` routes the message to the cursor that scheduled it and the `tag`
/// invalidates ticks scheduled before the most recent focus or mode change.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the cursor instance this message targets.
    pub id: usize,
    /// Sequence tag; stale tags are dropped.
    pub tag: usize,
}

/// How the caret behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The caret blinks at `blink_speed`.
    Blink,
    /// The caret is always shown.
    Static,
    /// The caret is never shown.
    Hide,
}

/// The caret model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Interval between blink phases.
    pub blink_speed: Duration,
    /// Style for the caret block when shown.
    pub style: Style,
    /// Style for the character underneath while the caret is in its off phase.
    pub text_style: Style,

    ch: String,
    id: usize,
    focus: bool,
    shown: bool,
    tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            ch: " ".to_string(),
            id: next_id(),
            focus: false,
            shown: false,
            tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates a caret with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles blink messages addressed to this cursor.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            if blink.id != self.id || blink.tag != self.tag {
                return None;
            }
            self.shown = !self.shown;
            return self.blink_cmd();
        }
        None
    }

    /// Returns the caret mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the caret mode, restarting the blink cycle when needed.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.shown = self.focus && mode != Mode::Hide;
        if mode == Mode::Blink && self.focus {
            return self.blink_cmd();
        }
        None
    }

    /// Schedules the next blink tick, invalidating earlier ones.
    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }
        self.tag += 1;
        let (id, tag) = (self.id, self.tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Focuses the caret and starts it blinking if applicable.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.shown = self.mode != Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Blurs the caret; the off-phase style is used until refocused.
    pub fn blur(&mut self) {
        self.focus = false;
        self.shown = false;
    }

    /// Returns whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character displayed under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.ch = s.to_string();
    }

    /// Renders the caret.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || !self.shown {
            return self.text_style.clone().inline(true).render(&self.ch);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.ch)
    }
}

/// Creates a caret with default settings. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_cmd_captures_tag_at_creation() {
        let mut m = Model::new();
        m.blink_speed = Duration::from_millis(10);
        m.focus = true;

        let _cmd1 = m.blink_cmd().expect("cmd1");
        let first_tag = m.tag;
        let _cmd2 = m.blink_cmd().expect("cmd2");

        // The second schedule bumped the tag, so the first command's message
        // would be rejected on arrival.
        assert_ne!(first_tag, m.tag);
    }

    #[test]
    fn test_stale_blink_is_ignored() {
        let mut m = Model::new();
        let _ = m.focus();
        let shown_before = m.shown;

        let stale: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.tag + 1,
        });
        assert!(m.update(&stale).is_none());
        assert_eq!(m.shown, shown_before);
    }

    #[test]
    fn test_hidden_mode_renders_text_style() {
        let mut m = Model::new();
        let _ = m.focus();
        let _ = m.set_mode(Mode::Hide);
        m.set_char("x");
        assert_eq!(lipgloss_extras::lipgloss::strip_ansi(&m.view()), "x");
    }
}
