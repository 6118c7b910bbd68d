//! Type-safe key bindings for terminal components.
//!
//! This module provides the key binding system used by the suggest input:
//! a [`Binding`] couples one or more key presses with help text and an
//! enabled/disabled state, and the [`KeyMap`] trait lets components expose
//! their bindings to help renderers.
//!
//! Bindings can be built either with the struct API or with the option-style
//! constructors that mirror the upstream Go library:
//!
//! ```rust
//! use bubbletea_suggest::key::{new_binding, with_help, with_keys_str};
//!
//! let confirm = new_binding(vec![
//!     with_keys_str(&["enter"]),
//!     with_help("enter", "select suggestion"),
//! ]);
//! assert!(confirm.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code (character, arrow, function key, ...).
    pub code: KeyCode,
    /// Modifier keys held for this press.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Returns true when `msg` is this key press.
    ///
    /// Shift is ignored for character keys because the shifted case is
    /// already encoded in the character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut mods = msg.modifiers;
        if matches!(self.code, KeyCode::Char(_)) {
            mods.remove(KeyModifiers::SHIFT);
        }
        mods == self.mods
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding, shown by help renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/↓"`.
    pub key: String,
    /// What the binding does, e.g. `"navigate"`.
    pub desc: String,
}

/// A key binding: the set of key presses that trigger an action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key presses.
    ///
    /// Accepts bare [`KeyCode`]s or `(KeyCode, KeyModifiers)` pairs:
    ///
    /// ```rust
    /// use bubbletea_suggest::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    /// let confirm = Binding::new(vec![KeyCode::Enter]);
    /// # let _ = (quit, confirm);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns whether the binding is currently active.
    ///
    /// A binding with no keys is never active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true when `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A configuration option for [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Bind these key presses.
    Keys(Vec<KeyPress>),
    /// Attach help text.
    WithHelp(Help),
    /// Start the binding disabled.
    Disabled,
}

/// Builds a [`Binding`] from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt::Keys(keys)
}

/// Option: bind keys described by strings such as `"up"`, `"ctrl+n"` or `"x"`.
///
/// Unrecognized descriptions are skipped, matching the permissive behavior
/// of the upstream library.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: attach help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Option: start the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Returns true when `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Returns true when `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Parses a textual key description into a [`KeyPress`].
///
/// Supports `"ctrl+"` and `"alt+"` prefixes, the common named keys, and
/// single characters.
fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;

    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

/// Components expose their bindings through this trait so applications can
/// render contextual help.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(
            parse_key("up"),
            Some(KeyPress {
                code: KeyCode::Up,
                mods: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("ctrl+n"),
            Some(KeyPress {
                code: KeyCode::Char('n'),
                mods: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key("alt+enter"),
            Some(KeyPress {
                code: KeyCode::Enter,
                mods: KeyModifiers::ALT
            })
        );
        assert_eq!(parse_key("not-a-key"), None);
    }

    #[test]
    fn test_binding_matches() {
        let binding = new_binding(vec![with_keys_str(&["down", "ctrl+n"])]);

        assert!(binding.matches(&key(KeyCode::Down)));
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!binding.matches(&key(KeyCode::Up)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = new_binding(vec![with_keys_str(&["enter"])]);
        binding.set_enabled(false);
        assert!(!binding.matches(&key(KeyCode::Enter)));

        let unset = Binding::default();
        assert!(!unset.enabled());
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        let binding = Binding::new(vec![KeyCode::Char('A')]);
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('A'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn test_help_text() {
        let binding = new_binding(vec![
            with_keys_str(&["esc"]),
            with_help("esc", "clear input"),
        ]);
        assert_eq!(binding.help().key, "esc");
        assert_eq!(binding.help().desc, "clear input");
    }
}
