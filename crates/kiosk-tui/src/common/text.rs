//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap at `max_width` terminal columns.
///
/// Words wider than a full line are broken mid-word. Always returns at
/// least one line for non-degenerate widths so layout heights stay stable.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if word.width() <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            for ch in word.chars() {
                if !current.is_empty() && current.width() + ch.width().unwrap_or(0) > max_width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 11);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn fits_exact_width_on_one_line() {
        assert_eq!(wrap_text("abc def", 7), vec!["abc def"]);
    }

    #[test]
    fn breaks_overlong_words_mid_word() {
        let lines = wrap_text("ab extraordinarily", 6);
        assert_eq!(lines, vec!["ab", "extrao", "rdinar", "ily"]);
    }

    #[test]
    fn empty_text_still_occupies_a_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }
}
