//! Header component renderer.
//!
//! This module renders the navigation bar: the brand mark followed by one tab
//! per page, with the active page drawn in selection colors.

use crate::ui::helpers::{pad, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the navigation bar as one line.
///
/// # Parameters
///
/// * `out` - Frame buffer
/// * `header` - Brand and tabs
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
///  I | A   INFO   ATHLETES   RESULTS   ITEMS [padding]
/// ```
///
/// The line is padded to the full terminal width so an optional header
/// background covers it.
///
/// # Example
///
/// ```rust
/// use trackside::ui::components::render_header;
/// use trackside::ui::viewmodel::{HeaderInfo, TabInfo};
/// use trackside::ui::Theme;
///
/// let header = HeaderInfo {
///     brand: "I | A".to_string(),
///     tabs: vec![TabInfo { title: "INFO", is_active: true }],
/// };
/// let mut out = String::new();
/// render_header(&mut out, &header, &Theme::default(), 80);
/// assert!(out.contains("INFO"));
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let base = |out: &mut String| {
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        if let Some(bg) = &theme.colors.header_bg {
            out.push_str(&Theme::bg(bg));
        }
    };

    out.push_str(Theme::bold());
    base(out);
    let brand = format!(" {} ", header.brand);
    out.push_str(&brand);
    let mut used = width(&brand);

    for tab in &header.tabs {
        let label = format!("  {}  ", tab.title);
        if tab.is_active {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
            out.push_str(&label);
            out.push_str(Theme::reset());
            out.push_str(Theme::bold());
            base(out);
        } else {
            out.push_str(&label);
        }
        used += width(&label);
    }

    pad(out, cols.saturating_sub(used));
    out.push_str(Theme::reset());
    out.push('\n');
}
