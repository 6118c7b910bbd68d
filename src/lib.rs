#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-suggest/")]

//! # bubbletea-suggest
//!
//! A suggestion-dropdown search input for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The component filters a read-only keyword dataset by exact prefix as the
//! user types and renders the matches in a dropdown beneath the input. It
//! follows the Elm Architecture pattern: embed the model in your own
//! application model, forward messages to `update()`, and compose `view()`
//! into your output.
//!
//! ## Features
//!
//! - **Prefix-matched suggestions** recomputed on every edit, in dataset order
//! - **Wrap-around keyboard navigation** through the suggestion list
//! - **Deferred blur-hide** so a selection landing just after a blur still
//!   completes (200 ms by default, configurable)
//! - **Type-safe key bindings** with help text via the [`key`] module
//! - **Themable** through Lip Gloss styles
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_suggest::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     search: SuggestInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = suggest_new_with_keywords(vec![
//!             Keyword::new(1, "cat"),
//!             Keyword::new(2, "car"),
//!             Keyword::new(3, "dog"),
//!         ]);
//!         let focus_cmd = search.focus();
//!         (Self { search }, Some(focus_cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.search.view()
//!     }
//! }
//! ```
//!
//! ## Dataset
//!
//! The widget never mutates the keyword list it is given. The [`dataset`]
//! module parses and validates keyword JSON and ships a small bundled set
//! for demos:
//!
//! ```rust
//! use bubbletea_suggest::dataset::bundled_keywords;
//! use bubbletea_suggest::suggest::new_with_keywords;
//!
//! let input = new_with_keywords(bundled_keywords().to_vec());
//! # let _ = input;
//! ```

pub mod cursor;
pub mod dataset;
pub mod key;
pub mod suggest;

use bubbletea_rs::Cmd;

/// Focus management for components embedded in a host application.
///
/// Focused components receive keyboard input and should indicate their
/// active state; blurred components ignore key events. Both transitions may
/// return a command: focusing typically starts the caret blink, and blurring
/// the suggest input schedules the deferred hide of its suggestion list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_suggest::prelude::*;
/// use bubbletea_rs::Cmd;
///
/// fn cycle_focus<T: Component>(component: &mut T) {
///     let _cmd: Option<Cmd> = component.focus();
///     assert!(component.focused());
///     let _hide_cmd: Option<Cmd> = component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut input = suggest_new();
/// cycle_focus(&mut input);
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks such as starting a
    /// caret blink timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    ///
    /// May return a command for teardown tasks; the suggest input returns
    /// the deferred hide command here, which must be executed for the
    /// suggestion list to close.
    fn blur(&mut self) -> Option<Cmd>;

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use dataset::{bundled_keywords, parse_keywords, DatasetError};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use suggest::{
    default_key_map as suggest_default_key_map, new as suggest_new,
    new_with_keywords as suggest_new_with_keywords, prefix_filter, HideSuggestionsMsg,
    KeyMap as SuggestKeyMap, Keyword, Model as SuggestInput, ValidateFunc,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_suggest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::Model as Cursor;
    pub use crate::dataset::{bundled_keywords, parse_keywords, DatasetError};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::suggest::{
        default_key_map as suggest_default_key_map, new as suggest_new,
        new_with_keywords as suggest_new_with_keywords, prefix_filter, HideSuggestionsMsg,
        KeyMap as SuggestKeyMap, Keyword, Model as SuggestInput, ValidateFunc,
    };
    pub use crate::Component;
}
