//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar.
///
/// Displays command hints centered horizontally with dimmed styling. Text
/// wider than the terminal is truncated so the layout is not corrupted on
/// narrow terminals.
///
/// # Example
///
/// ```rust
/// use trackside::ui::components::render_footer;
/// use trackside::ui::viewmodel::FooterInfo;
/// use trackside::ui::Theme;
///
/// let footer = FooterInfo { keybindings: "info | athletes | quit".to_string() };
/// let mut out = String::new();
/// render_footer(&mut out, &footer, &Theme::default(), 80);
/// ```
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &footer.keybindings, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
