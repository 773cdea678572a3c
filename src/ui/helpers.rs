//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across UI components. Every helper appends to
//! a `String` frame instead of printing so frames can be written in one go
//! and inspected in tests.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with a highlighted byte range
//! - **Width Handling**: Truncates and pads on character counts, not bytes
//!
//! # Example
//!
//! ```rust
//! use trackside::ui::helpers::{fit, push_highlighted};
//! use trackside::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! push_highlighted(&mut out, "Long Jump", Some((5, 9)), &theme);
//! assert!(out.contains("Jump"));
//! assert_eq!(fit("Decathlon", 6), "Dec...");
//! ```

use crate::ui::theme::Theme;

/// Width of `text` in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` characters, ending with `...` when cut.
#[must_use]
pub fn fit(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Appends `text` centered in `cols` characters.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let len = width(text).min(cols);
    let left = cols.saturating_sub(len) / 2;
    pad(out, left);
    out.push_str(&fit(text, cols));
    pad(out, cols.saturating_sub(left + len));
}

/// Appends text with one highlighted byte range for a search match.
///
/// Ranges that fall outside `text` or off a character boundary are ignored
/// and the text is written plain. After the highlight the normal text color
/// is restored.
///
/// # Parameters
///
/// * `out` - Frame buffer
/// * `text` - The text to render
/// * `range` - Byte range `(start, end)` to highlight, exclusive end
/// * `theme` - Active color theme for highlight colors
pub fn push_highlighted(out: &mut String, text: &str, range: Option<(usize, usize)>, theme: &Theme) {
    let parts = range.and_then(|(start, end)| {
        Some((text.get(..start)?, text.get(start..end)?, text.get(end..)?))
    });

    let Some((before, matched, after)) = parts else {
        out.push_str(text);
        return;
    };

    out.push_str(before);
    out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
    out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
    out.push_str(matched);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(after);
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(frame: &str) -> String {
    let mut plain = String::with_capacity(frame.len());
    let mut chars = frame.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("Rømer", 5), "Rømer");
        assert_eq!(fit("Nordic Championships", 10), "Nordic ...");
        assert_eq!(fit("abc", 2), "ab");
    }

    #[test]
    fn highlight_wraps_only_the_match() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Long Jump", Some((5, 9)), &theme);

        let start = out.find("Jump").unwrap();
        assert!(out[..start].ends_with(&Theme::bg(&theme.colors.match_highlight_bg)));
        assert_eq!(strip_ansi(&out), "Long Jump");
    }

    #[test]
    fn out_of_bounds_range_renders_plain() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Ann", Some((1, 9)), &theme);
        assert_eq!(out, "Ann");
    }

    #[test]
    fn centered_text_fills_the_line() {
        let mut out = String::new();
        push_centered(&mut out, "hi", 6);
        assert_eq!(out, "  hi  ");
    }
}
