//! Tests for the suggest input component.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::strip_ansi;
use std::time::Duration;

fn dataset() -> Vec<Keyword> {
    vec![
        Keyword::new(1, "cat"),
        Keyword::new(2, "car"),
        Keyword::new(3, "dog"),
    ]
}

fn focused_input() -> Model {
    let mut input = new_with_keywords(dataset());
    let _ = input.focus();
    input
}

fn press(input: &mut Model, code: KeyCode) {
    let msg: Msg = Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    });
    let _ = input.update(msg);
}

fn texts(keywords: &[Keyword]) -> Vec<&str> {
    keywords.iter().map(|k| k.text.as_str()).collect()
}

#[test]
fn test_new_defaults() {
    let input = new();

    assert_eq!(input.prompt, "> ");
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert_eq!(input.char_limit, DEFAULT_CHAR_LIMIT);
    assert_eq!(input.blur_hide_delay, DEFAULT_BLUR_HIDE_DELAY);
    assert!(!input.focused());
    assert!(!input.visible());
    assert!(input.suggestions().is_empty());
    assert_eq!(input.highlight_index(), None);
    assert!(input.err.is_none());
}

#[test]
fn test_prefix_filter_completeness_and_order() {
    let matched = prefix_filter("ca", &dataset());
    assert_eq!(texts(&matched), vec!["cat", "car"]);

    // Every result is a prefix match; every prefix match is a result.
    for kw in &matched {
        assert!(kw.text.starts_with("ca"));
    }
    let expected: Vec<Keyword> = dataset()
        .into_iter()
        .filter(|k| k.text.starts_with("ca"))
        .collect();
    assert_eq!(matched, expected);
}

#[test]
fn test_prefix_filter_empty_query() {
    assert!(prefix_filter("", &dataset()).is_empty());
    assert!(prefix_filter("", &[]).is_empty());
}

#[test]
fn test_prefix_filter_no_matches() {
    assert!(prefix_filter("zebra", &dataset()).is_empty());
}

#[test]
fn test_prefix_filter_is_case_sensitive() {
    assert!(prefix_filter("Ca", &dataset()).is_empty());
    assert_eq!(prefix_filter("ca", &dataset()).len(), 2);
}

#[test]
fn test_typing_updates_suggestions() {
    let mut input = focused_input();

    press(&mut input, KeyCode::Char('c'));
    press(&mut input, KeyCode::Char('a'));

    assert_eq!(input.value(), "ca");
    assert_eq!(texts(input.suggestions()), vec!["cat", "car"]);
    assert!(input.visible());
    assert_eq!(input.highlight_index(), None);
}

#[test]
fn test_set_value_resets_highlight() {
    let mut input = focused_input();
    input.set_value("ca");
    press(&mut input, KeyCode::Down);
    assert_eq!(input.highlight_index(), Some(0));

    input.set_value("c");
    assert_eq!(input.highlight_index(), None);
    assert_eq!(texts(input.suggestions()), vec!["cat", "car"]);
}

#[test]
fn test_empty_input_suppresses_suggestions() {
    let mut input = focused_input();
    press(&mut input, KeyCode::Char('c'));
    assert!(input.visible());

    press(&mut input, KeyCode::Backspace);
    assert_eq!(input.value(), "");
    assert!(input.suggestions().is_empty());
    assert!(!input.visible());
}

#[test]
fn test_down_down_up_sequence() {
    let mut input = focused_input();
    input.set_value("ca");

    press(&mut input, KeyCode::Down);
    assert_eq!(input.highlight_index(), Some(0));
    press(&mut input, KeyCode::Down);
    assert_eq!(input.highlight_index(), Some(1));
    press(&mut input, KeyCode::Up);
    assert_eq!(input.highlight_index(), Some(0));
}

#[test]
fn test_down_wraps_to_first() {
    let mut input = focused_input();
    input.set_value("ca");

    // From no highlight, N presses of Down visit 0..N-1 and wrap back to 0.
    let mut seen = Vec::new();
    for _ in 0..3 {
        press(&mut input, KeyCode::Down);
        seen.push(input.highlight_index().unwrap());
    }
    assert_eq!(seen, vec![0, 1, 0]);
}

#[test]
fn test_up_wraps_to_last() {
    let mut input = focused_input();
    input.set_value("ca");

    // Up with no highlight starts at the last entry.
    press(&mut input, KeyCode::Up);
    assert_eq!(input.highlight_index(), Some(1));

    // Up from the first entry wraps to the last.
    press(&mut input, KeyCode::Down);
    assert_eq!(input.highlight_index(), Some(0));
    press(&mut input, KeyCode::Up);
    assert_eq!(input.highlight_index(), Some(1));
}

#[test]
fn test_navigation_ignored_without_suggestions() {
    let mut input = focused_input();

    press(&mut input, KeyCode::Down);
    press(&mut input, KeyCode::Up);

    assert_eq!(input.highlight_index(), None);
    assert_eq!(input.value(), "");
    assert!(!input.visible());
}

#[test]
fn test_confirm_selects_highlighted() {
    let mut input = focused_input();
    input.set_value("ca");
    press(&mut input, KeyCode::Down);
    press(&mut input, KeyCode::Down);
    assert_eq!(input.highlight_index(), Some(1));

    press(&mut input, KeyCode::Enter);

    assert_eq!(input.value(), "car");
    assert!(input.suggestions().is_empty());
    assert!(!input.visible());
    assert_eq!(input.highlight_index(), None);
    assert_eq!(input.position(), 3);
}

#[test]
fn test_confirm_without_highlight_is_noop() {
    let mut input = focused_input();
    input.set_value("ca");

    press(&mut input, KeyCode::Enter);

    assert_eq!(input.value(), "ca");
    assert_eq!(texts(input.suggestions()), vec!["cat", "car"]);
    assert!(input.visible());
}

#[test]
fn test_select_ignores_highlight() {
    let mut input = focused_input();
    input.set_value("ca");
    assert_eq!(input.highlight_index(), None);

    let selected = input.select(0).expect("in range");
    assert_eq!(selected.text, "cat");
    assert_eq!(input.value(), "cat");
    assert!(input.suggestions().is_empty());
    assert!(!input.visible());
}

#[test]
fn test_select_out_of_range() {
    let mut input = focused_input();
    input.set_value("ca");

    assert!(input.select(5).is_none());
    assert_eq!(input.value(), "ca");
    assert!(input.visible());
}

#[test]
fn test_selected_text_still_matches_itself() {
    let mut input = focused_input();
    input.set_value("ca");
    input.select(1);
    assert_eq!(input.value(), "car");

    // Re-typing the committed text yields a list containing it.
    input.set_value("car");
    assert_eq!(texts(input.suggestions()), vec!["car"]);
}

#[test]
fn test_clear_resets_everything() {
    let mut input = focused_input();
    input.set_value("cat");
    press(&mut input, KeyCode::Down);

    press(&mut input, KeyCode::Esc);

    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert!(input.suggestions().is_empty());
    assert!(!input.visible());
    assert_eq!(input.highlight_index(), None);
}

#[test]
fn test_focus_rereveals_prior_suggestions() {
    let mut input = focused_input();
    input.set_value("ca");
    let _ = input.blur();

    let hide: Msg = Box::new(HideSuggestionsMsg {
        id: input.id,
        tag: input.hide_tag,
    });
    let _ = input.update(hide);
    assert!(!input.visible());
    // The list is retained while hidden.
    assert_eq!(input.suggestions().len(), 2);

    let _ = input.focus();
    assert!(input.visible());
    assert_eq!(texts(input.suggestions()), vec!["cat", "car"]);
}

#[test]
fn test_hide_message_guarded_by_id_and_tag() {
    let mut input = focused_input();
    input.set_value("ca");
    let _ = input.blur();

    let stale: Msg = Box::new(HideSuggestionsMsg {
        id: input.id,
        tag: input.hide_tag + 1,
    });
    let _ = input.update(stale);
    assert!(input.visible());

    let foreign: Msg = Box::new(HideSuggestionsMsg {
        id: input.id + 1,
        tag: input.hide_tag,
    });
    let _ = input.update(foreign);
    assert!(input.visible());

    let current: Msg = Box::new(HideSuggestionsMsg {
        id: input.id,
        tag: input.hide_tag,
    });
    let _ = input.update(current);
    assert!(!input.visible());
}

#[test]
fn test_refocus_discards_pending_hide() {
    let mut input = focused_input();
    input.set_value("ca");

    let _ = input.blur();
    let pending_tag = input.hide_tag;
    let _ = input.focus();

    let late: Msg = Box::new(HideSuggestionsMsg {
        id: input.id,
        tag: pending_tag,
    });
    let _ = input.update(late);
    assert!(input.visible());
}

#[test]
fn test_hide_after_selection_is_noop() {
    let mut input = focused_input();
    input.set_value("ca");
    let _ = input.blur();

    // The selection lands before the deferred hide fires.
    input.select(0);
    assert!(!input.visible());

    let hide: Msg = Box::new(HideSuggestionsMsg {
        id: input.id,
        tag: input.hide_tag,
    });
    let _ = input.update(hide);

    assert_eq!(input.value(), "cat");
    assert!(input.suggestions().is_empty());
    assert!(!input.visible());
}

#[tokio::test]
async fn test_blur_command_delivers_hide_message() {
    let mut input = focused_input();
    input.set_value("ca");
    input.blur_hide_delay = Duration::from_millis(1);

    let cmd = input.blur();
    let msg = cmd.await.expect("hide message");
    let (id, tag) = {
        let hide = msg
            .downcast_ref::<HideSuggestionsMsg>()
            .expect("HideSuggestionsMsg");
        (hide.id, hide.tag)
    };
    assert_eq!(id, input.id);
    assert_eq!(tag, input.hide_tag);

    let _ = input.update(msg);
    assert!(!input.visible());
}

#[test]
fn test_char_limit_truncates() {
    let mut input = focused_input();
    input.char_limit = 5;

    input.set_value("hello world");
    assert_eq!(input.value(), "hello");

    // Typing at the limit is rejected.
    press(&mut input, KeyCode::Char('x'));
    assert_eq!(input.value(), "hello");
}

#[test]
fn test_validate_hook_reports_errors() {
    let mut input = focused_input();
    input.set_validate(Box::new(|s: &str| {
        if s.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(())
        } else {
            Err("lowercase only".to_string())
        }
    }));

    input.set_value("cat");
    assert!(input.err.is_none());

    input.set_value("Cat");
    assert_eq!(input.err.as_deref(), Some("lowercase only"));
}

#[test]
fn test_update_requires_focus() {
    let mut input = new_with_keywords(dataset());

    press(&mut input, KeyCode::Char('c'));

    assert_eq!(input.value(), "");
    assert!(input.suggestions().is_empty());
}

#[test]
fn test_editing_moves_caret() {
    let mut input = focused_input();
    press(&mut input, KeyCode::Char('d'));
    press(&mut input, KeyCode::Char('g'));
    press(&mut input, KeyCode::Left);
    press(&mut input, KeyCode::Char('o'));

    assert_eq!(input.value(), "dog");
    assert_eq!(input.position(), 2);
    assert_eq!(texts(input.suggestions()), vec!["dog"]);

    press(&mut input, KeyCode::Home);
    assert_eq!(input.position(), 0);
    press(&mut input, KeyCode::End);
    assert_eq!(input.position(), 3);
}

#[test]
fn test_set_keywords_recomputes() {
    let mut input = new();
    let _ = input.focus();
    input.set_value("ca");
    assert!(input.suggestions().is_empty());

    input.set_keywords(dataset());
    assert_eq!(texts(input.suggestions()), vec!["cat", "car"]);
    assert!(input.visible());
}

#[test]
fn test_view_shows_placeholder_when_empty() {
    let mut input = new();
    input.placeholder = "search...".to_string();

    let view = strip_ansi(&input.view());
    assert!(view.contains("search..."));
}

#[test]
fn test_view_renders_dropdown_rows() {
    let mut input = focused_input();
    input.set_value("ca");
    press(&mut input, KeyCode::Down);

    let view = strip_ansi(&input.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ca"));
    assert!(lines[1].contains("cat"));
    assert!(lines[2].contains("car"));
}

#[test]
fn test_view_omits_dropdown_when_hidden() {
    let mut input = focused_input();
    input.set_value("ca");
    press(&mut input, KeyCode::Esc);

    let view = strip_ansi(&input.view());
    assert_eq!(view.lines().count(), 1);
}

#[test]
fn test_view_pads_rows_to_width() {
    let mut input = focused_input();
    input.width = 12;
    input.set_value("do");

    let view = strip_ansi(&input.view());
    let row = view.lines().nth(1).expect("dropdown row");
    assert_eq!(row.len(), 12);
    assert!(row.contains("dog"));
}
