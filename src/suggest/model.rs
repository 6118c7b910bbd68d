//! Core model for the suggest input component.

use super::keymap::{default_key_map, KeyMap};
use super::types::{Keyword, ValidateFunc};
use crate::cursor::{new as cursor_new, Model as Cursor};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Each input gets a process-unique id so deferred hide messages from one
// instance are never consumed by another.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// How long a blurred input keeps its suggestion list on screen before
/// hiding it, leaving time for an in-flight selection to land.
pub const DEFAULT_BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Maximum input length accepted by default.
pub const DEFAULT_CHAR_LIMIT: usize = 100;

/// A single-line search input with a prefix-matched suggestion dropdown.
///
/// The model owns the full widget state: the text value and caret, the
/// read-only keyword dataset, the currently matched suggestions, their
/// visibility, and the keyboard highlight. State changes only through the
/// operations on this type; each event is processed to completion before the
/// next one is seen.
///
/// # Examples
///
/// ```rust
/// use bubbletea_suggest::suggest::{new_with_keywords, Keyword};
///
/// let mut input = new_with_keywords(vec![
///     Keyword::new(1, "cat"),
///     Keyword::new(2, "car"),
///     Keyword::new(3, "dog"),
/// ]);
/// let _ = input.focus();
/// input.set_value("ca");
/// assert_eq!(input.suggestions().len(), 2);
/// assert!(input.visible());
/// ```
pub struct Model {
    /// An error reported by the validation hook, if any.
    pub err: Option<String>,

    /// Prompt displayed before the input text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the text as it is typed.
    pub text_style: Style,

    /// Placeholder shown while the input is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,

    /// Style for suggestion rows.
    pub suggestion_style: Style,
    /// Style for the highlighted suggestion row.
    pub highlight_style: Style,

    /// The caret sub-component.
    pub cursor: Cursor,

    /// Key bindings.
    pub key_map: KeyMap,

    /// Maximum number of characters accepted. 0 means no limit.
    pub char_limit: usize,

    /// Display width used to pad suggestion rows. 0 disables padding.
    pub width: usize,

    /// Delay between losing focus and hiding the suggestion list.
    pub blur_hide_delay: Duration,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,

    pub(super) keywords: Vec<Keyword>,
    pub(super) suggestions: Vec<Keyword>,
    pub(super) visible: bool,
    pub(super) highlight: Option<usize>,

    pub(super) id: usize,
    pub(super) hide_tag: usize,

    pub(super) validate: Option<ValidateFunc>,
}

/// Creates a suggest input with an empty keyword dataset.
///
/// The returned model is not focused; call `focus()` to enable keyboard
/// input, and `set_keywords()` to supply the dataset.
pub fn new() -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        suggestion_style: Style::new().foreground(Color::from("240")),
        highlight_style: Style::new().reverse(true),
        cursor: cursor_new(),
        key_map: default_key_map(),
        char_limit: DEFAULT_CHAR_LIMIT,
        width: 0,
        blur_hide_delay: DEFAULT_BLUR_HIDE_DELAY,
        value: Vec::new(),
        pos: 0,
        focus: false,
        keywords: Vec::new(),
        suggestions: Vec::new(),
        visible: false,
        highlight: None,
        id: next_id(),
        hide_tag: 0,
        validate: None,
    }
}

/// Creates a suggest input over the given keyword dataset.
pub fn new_with_keywords(keywords: Vec<Keyword>) -> Model {
    let mut m = new();
    m.keywords = keywords;
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
