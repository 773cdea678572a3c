//! Search bar component renderer.
//!
//! This module renders the results filter box: the search text, the selected
//! discipline and gender, and the options each criterion accepts.

use crate::ui::helpers::{fit, pad, width};
use crate::ui::theme::{Rgb, Theme};
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the filter box.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────────────────┐
/// [margin] │ Search: ann   Discipline: All   Gender: F │
/// [margin] │ Disciplines: 100m, Long Jump              │
/// [margin] │ Genders: M: Male, F: Female               │
/// [margin] └──────────────────────────────────────────┘
/// ```
///
/// Empty criteria show as `All`. Borders use the `search_bar_border` color,
/// text uses `text_normal` and option lines use `text_dim`.
///
/// # Example
///
/// ```rust
/// use trackside::ui::components::render_search_bar;
/// use trackside::ui::viewmodel::SearchBarInfo;
/// use trackside::ui::Theme;
///
/// let search = SearchBarInfo {
///     query: "ann".to_string(),
///     discipline: String::new(),
///     gender: "F".to_string(),
///     discipline_options: vec!["100m".to_string()],
///     gender_options: vec!["F: Female".to_string()],
/// };
/// let mut out = String::new();
/// render_search_bar(&mut out, &search, &Theme::default(), 80);
/// assert!(out.contains("Search: ann"));
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let or_all = |value: &str| if value.is_empty() { "All".to_string() } else { value.to_string() };

    let criteria = format!(
        " Search: {}   Discipline: {}   Gender: {}",
        search.query,
        or_all(&search.discipline),
        or_all(&search.gender)
    );
    let disciplines = format!(" Disciplines: {}", search.discipline_options.join(", "));
    let genders = format!(" Genders: {}", search.gender_options.join(", "));

    border_line(out, theme, '┌', '┐', inner_width);
    boxed_line(out, theme, &criteria, &theme.colors.text_normal, inner_width);
    boxed_line(out, theme, &disciplines, &theme.colors.text_dim, inner_width);
    boxed_line(out, theme, &genders, &theme.colors.text_dim, inner_width);
    border_line(out, theme, '└', '┘', inner_width);
}

fn border_line(out: &mut String, theme: &Theme, left: char, right: char, inner_width: usize) {
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push(left);
    out.push_str(&"─".repeat(inner_width));
    out.push(right);
    out.push_str(Theme::reset());
    out.push('\n');
}

fn boxed_line(out: &mut String, theme: &Theme, text: &str, color: &Rgb, inner_width: usize) {
    let text = fit(text, inner_width);

    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    pad(out, inner_width.saturating_sub(width(&text)));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');
}
