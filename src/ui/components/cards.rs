//! Athlete card grid renderer.

use crate::ui::helpers::{fit, pad, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardInfo;

/// Outer width of one card, borders included.
const CARD_WIDTH: usize = 30;

/// Renders cards left to right, as many per row as fit in `cols`.
///
/// Each card shows the name, age group, gender and club:
///
/// ```text
/// ┌────────────────────────────┐
/// │ #1 Ann Holm                │
/// │ SENIOR · F                 │
/// │ Oslo IL                    │
/// └────────────────────────────┘
/// ```
pub fn render_cards(out: &mut String, cards: &[CardInfo], theme: &Theme, cols: usize) {
    let per_row = (cols / (CARD_WIDTH + 1)).max(1);
    let inner = CARD_WIDTH - 2;

    for chunk in cards.chunks(per_row) {
        let top = format!("┌{}┐", "─".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));

        frame_line(out, theme, chunk.len(), &top);
        content_line(out, theme, chunk, inner, |c| format!(" #{} {}", c.id, c.name), true);
        content_line(out, theme, chunk, inner, |c| format!(" {} · {}", c.age_group, c.gender), false);
        content_line(out, theme, chunk, inner, |c| format!(" {}", c.club), false);
        frame_line(out, theme, chunk.len(), &bottom);
    }
}

fn frame_line(out: &mut String, theme: &Theme, count: usize, line: &str) {
    out.push_str(&Theme::fg(&theme.colors.border));
    for _ in 0..count {
        out.push_str(line);
        out.push(' ');
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

fn content_line(
    out: &mut String,
    theme: &Theme,
    cards: &[CardInfo],
    inner: usize,
    text: impl Fn(&CardInfo) -> String,
    bold: bool,
) {
    for card in cards {
        let text = fit(&text(card), inner);
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push('│');
        if bold {
            out.push_str(Theme::bold());
        }
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&text);
        out.push_str(Theme::reset());
        pad(out, inner.saturating_sub(width(&text)));
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push_str("│ ");
    }
    out.push_str(Theme::reset());
    out.push('\n');
}
