//! Empty state and landing page renderers.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, InfoPanel};

/// Renders the empty state message.
///
/// Displays a centered two-line message when the page has no rows. Typically
/// shown when:
/// - The collection has not been loaded or is empty on the server
/// - The results filter excludes every row
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank line]
/// ```
///
/// The message uses the `empty_state_fg` theme color, and the subtitle uses
/// `text_dim` with dim styling.
///
/// # Example
///
/// ```rust
/// use trackside::ui::components::render_empty_state;
/// use trackside::ui::viewmodel::EmptyState;
/// use trackside::ui::Theme;
///
/// let empty = EmptyState {
///     message: "No items yet".to_string(),
///     subtitle: "Use 'new' to create one".to_string(),
/// };
/// let mut out = String::new();
/// render_empty_state(&mut out, &empty, &Theme::default(), 80);
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
    out.push_str("\n\n");
}

/// Renders the landing page: brand, date, time and cached collection sizes.
pub fn render_info(out: &mut String, info: &InfoPanel, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    push_centered(out, &info.brand, cols);
    out.push_str(Theme::reset());
    out.push_str("\n\n");

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &info.date, cols);
    out.push('\n');
    push_centered(out, &info.time, cols);
    out.push_str(Theme::reset());
    out.push_str("\n\n");

    let counts = info
        .counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &counts, cols);
    out.push_str(Theme::reset());
    out.push_str("\n\n");
}
