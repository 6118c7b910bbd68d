//! Suggestion-dropdown search input component.
//!
//! A single-line text input that filters a read-only keyword dataset by
//! exact, case-sensitive prefix as the user types, rendering matches in a
//! dropdown beneath the input. Arrow keys move a wrap-around highlight
//! through the list, enter commits the highlighted entry, and `select()`
//! commits any listed row directly for hosts that translate pointer events.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_suggest::suggest::{new_with_keywords, Keyword};
//!
//! let mut input = new_with_keywords(vec![
//!     Keyword::new(1, "cat"),
//!     Keyword::new(2, "car"),
//!     Keyword::new(3, "dog"),
//! ]);
//! let _ = input.focus();
//! input.set_value("ca");
//!
//! assert_eq!(input.suggestions().len(), 2);
//! assert!(input.visible());
//! ```
//!
//! # Blur behavior
//!
//! Blurring does not hide the list immediately: `blur()` returns a one-shot
//! command that delivers a [`HideSuggestionsMsg`] after
//! [`model::DEFAULT_BLUR_HIDE_DELAY`], so a selection landing right after
//! the blur still completes. Stale hide messages are dropped by id/tag.

pub mod keymap;
pub mod matcher;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use matcher::prefix_filter;
pub use model::{new, new_with_keywords, Model, DEFAULT_BLUR_HIDE_DELAY, DEFAULT_CHAR_LIMIT};
pub use types::{HideSuggestionsMsg, Keyword, ValidateFunc};
