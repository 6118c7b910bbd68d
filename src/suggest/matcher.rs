//! Prefix matching over the keyword dataset.

use super::model::Model;
use super::types::Keyword;

/// Returns every keyword whose text starts with `query`, in dataset order.
///
/// Matching is case-sensitive and compares exact prefixes. An empty query
/// matches nothing: suggestions are suppressed for empty input.
///
/// This is a pure function of its inputs.
///
/// # Examples
///
/// ```rust
/// use bubbletea_suggest::suggest::{prefix_filter, Keyword};
///
/// let keywords = vec![
///     Keyword::new(1, "cat"),
///     Keyword::new(2, "car"),
///     Keyword::new(3, "dog"),
/// ];
/// let matched = prefix_filter("ca", &keywords);
/// assert_eq!(matched.len(), 2);
/// assert!(prefix_filter("", &keywords).is_empty());
/// ```
pub fn prefix_filter(query: &str, keywords: &[Keyword]) -> Vec<Keyword> {
    if query.is_empty() {
        return Vec::new();
    }
    keywords
        .iter()
        .filter(|kw| kw.text.starts_with(query))
        .cloned()
        .collect()
}

impl Model {
    /// Recomputes the suggestion list for the current text.
    ///
    /// Called after every text mutation: the highlight resets and the list
    /// becomes visible exactly when there are matches.
    pub(super) fn refresh_suggestions(&mut self) {
        let query: String = self.value.iter().collect();
        self.suggestions = prefix_filter(&query, &self.keywords);
        self.highlight = None;
        self.visible = !self.suggestions.is_empty();
    }

    /// Returns the suggestions matching the current input, in dataset order.
    pub fn suggestions(&self) -> &[Keyword] {
        &self.suggestions
    }

    /// Returns whether the suggestion list is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the index of the highlighted suggestion, if any.
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    /// Returns the highlighted suggestion, if any.
    pub fn highlighted(&self) -> Option<&Keyword> {
        self.highlight.and_then(|i| self.suggestions.get(i))
    }

    /// Returns the keyword dataset this input suggests from.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}
