//! Core types for the suggest input component.

use bubbletea_rs::Msg;
use serde::{Deserialize, Serialize};

/// One entry of the keyword dataset the input suggests from.
///
/// Keywords are immutable records with a stable, unique id. The widget never
/// mutates the dataset it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Stable, unique identifier.
    pub id: u64,
    /// The suggestion text. Must be non-empty.
    pub text: String,
}

impl Keyword {
    /// Creates a keyword.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// One-shot message that hides the suggestion list after a blur.
///
/// Scheduled by `blur()` with a fixed delay so that a selection click landing
/// right after the blur still completes against a visible list. The `id`
/// routes the message to the input that scheduled it; the `tag` invalidates
/// hides scheduled before the most recent focus or blur.
#[derive(Debug, Clone)]
pub struct HideSuggestionsMsg {
    /// Id of the input instance this message targets.
    pub id: usize,
    /// Sequence tag; stale tags are dropped.
    pub tag: usize,
}

impl From<HideSuggestionsMsg> for Msg {
    fn from(msg: HideSuggestionsMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// ValidateFunc is a function that returns an error if the input is invalid.
/// Send is required to satisfy the bubbletea-rs Model: Send bound transitively.
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send>;
