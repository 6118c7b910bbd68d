//! Rendering for the suggest input.

use super::model::Model;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the input line and, when visible, the suggestion dropdown
    /// beneath it.
    pub fn view(&self) -> String {
        let mut out = if self.value.is_empty() && !self.placeholder.is_empty() {
            self.placeholder_view()
        } else {
            self.input_view()
        };

        if self.visible && !self.suggestions.is_empty() {
            out.push('\n');
            out.push_str(&self.suggestions_view());
        }

        out
    }

    fn input_view(&self) -> String {
        let before: String = self.value[..self.pos].iter().collect();
        let mut v = self.text_style.render(&before);

        if self.pos < self.value.len() {
            let mut cur = self.cursor.clone();
            cur.set_char(&self.value[self.pos].to_string());
            v.push_str(&cur.view());

            if self.pos + 1 < self.value.len() {
                let after: String = self.value[self.pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            }
        } else {
            // Caret past the end of the text.
            let mut cur = self.cursor.clone();
            cur.set_char(" ");
            v.push_str(&cur.view());
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    pub(super) fn placeholder_view(&self) -> String {
        let chars: Vec<char> = self.placeholder.chars().collect();
        let mut v = String::new();

        match chars.first() {
            Some(first) => {
                let mut cur = self.cursor.clone();
                cur.set_char(&first.to_string());
                v.push_str(&cur.view());
                if chars.len() > 1 {
                    let rest: String = chars[1..].iter().collect();
                    v.push_str(&self.placeholder_style.render(&rest));
                }
            }
            None => {
                let mut cur = self.cursor.clone();
                cur.set_char(" ");
                v.push_str(&cur.view());
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    pub(super) fn suggestions_view(&self) -> String {
        let rows: Vec<String> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, kw)| {
                let row = self.pad_row(&kw.text);
                if Some(i) == self.highlight {
                    self.highlight_style.render(&row)
                } else {
                    self.suggestion_style.render(&row)
                }
            })
            .collect();
        rows.join("\n")
    }

    /// Pads a row to the configured width so highlight styling covers the
    /// whole line, not just the text.
    fn pad_row(&self, text: &str) -> String {
        if self.width == 0 {
            return format!(" {} ", text);
        }
        let pad = self
            .width
            .saturating_sub(UnicodeWidthStr::width(text) + 2);
        format!(" {}{} ", text, " ".repeat(pad))
    }
}
