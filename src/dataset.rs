//! Keyword dataset loading and validation.
//!
//! The suggest input filters over a read-only list of [`Keyword`] records
//! supplied at construction time. This module parses such lists from JSON,
//! validates them (ids must be unique, text must be non-empty) and exposes a
//! small bundled dataset for demos and tests, loaded once per process.

use crate::suggest::Keyword;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Errors produced while loading a keyword dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The raw data was not valid keyword JSON.
    #[error("failed to parse keyword data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A keyword had an empty `text` field.
    #[error("keyword {id} has empty text")]
    EmptyText {
        /// Id of the offending record.
        id: u64,
    },

    /// Two keywords shared the same id.
    #[error("duplicate keyword id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u64,
    },
}

/// Parses a JSON array of `{ "id": ..., "text": ... }` records.
///
/// Record order is preserved; the suggest input surfaces matches in dataset
/// order.
///
/// # Examples
///
/// ```rust
/// use bubbletea_suggest::dataset::parse_keywords;
///
/// let keywords = parse_keywords(r#"[{"id": 1, "text": "cat"}]"#).unwrap();
/// assert_eq!(keywords[0].text, "cat");
/// ```
pub fn parse_keywords(raw: &str) -> Result<Vec<Keyword>, DatasetError> {
    let keywords: Vec<Keyword> = serde_json::from_str(raw)?;

    let mut seen = std::collections::HashSet::new();
    for kw in &keywords {
        if kw.text.is_empty() {
            return Err(DatasetError::EmptyText { id: kw.id });
        }
        if !seen.insert(kw.id) {
            return Err(DatasetError::DuplicateId { id: kw.id });
        }
    }

    Ok(keywords)
}

static BUNDLED: Lazy<Vec<Keyword>> = Lazy::new(|| {
    parse_keywords(include_str!("../data/keywords.json"))
        .expect("bundled keyword data is well-formed")
});

/// Returns the bundled demo dataset, parsed on first use.
pub fn bundled_keywords() -> &'static [Keyword] {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let keywords = parse_keywords(
            r#"[{"id": 1, "text": "cat"}, {"id": 2, "text": "car"}, {"id": 3, "text": "dog"}]"#,
        )
        .unwrap();

        let texts: Vec<&str> = keywords.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["cat", "car", "dog"]);
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = parse_keywords(r#"[{"id": 7, "text": ""}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyText { id: 7 }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err =
            parse_keywords(r#"[{"id": 1, "text": "cat"}, {"id": 1, "text": "car"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_keywords("not json"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let keywords = bundled_keywords();
        assert!(!keywords.is_empty());
        // Lazy: repeated access yields the same parsed data.
        assert_eq!(keywords.len(), bundled_keywords().len());
    }
}
