//! Modal panel renderer.
//!
//! Details and delete modals list the target's fields; edit and create modals
//! list the form fields with their `set` names, marking required ones with
//! `*` and listing select options underneath.

use crate::ui::helpers::{fit, pad, width};
use crate::ui::theme::{Rgb, Theme};
use crate::ui::viewmodel::ModalInfo;

const MODAL_MARGIN: usize = 4;

/// Renders the modal as a framed panel.
pub fn render_modal(out: &mut String, modal: &ModalInfo, theme: &Theme, cols: usize) {
    let inner = cols.saturating_sub(MODAL_MARGIN * 2 + 2);
    let title = fit(&format!(" {} ", modal.title), inner);

    pad(out, MODAL_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.modal_border));
    out.push('╭');
    out.push_str(Theme::bold());
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.modal_border));
    out.push_str(&"─".repeat(inner.saturating_sub(width(&title))));
    out.push('╮');
    out.push_str(Theme::reset());
    out.push('\n');

    for (label, value) in &modal.lines {
        modal_line(out, theme, &format!(" {label}: {value}"), &theme.colors.text_normal, inner);
    }

    for field in &modal.fields {
        let marker = if field.required { "*" } else { " " };
        let line = format!(" {marker}{} [{}]: {}", field.label, field.name, field.value);
        modal_line(out, theme, &line, &theme.colors.text_normal, inner);
        if !field.options.is_empty() {
            let options = format!("     options: {}", field.options.join(", "));
            modal_line(out, theme, &options, &theme.colors.text_dim, inner);
        }
    }

    modal_line(out, theme, "", &theme.colors.text_dim, inner);
    modal_line(out, theme, &format!(" {}", modal.prompt), &theme.colors.text_dim, inner);

    pad(out, MODAL_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.modal_border));
    out.push('╰');
    out.push_str(&"─".repeat(inner));
    out.push('╯');
    out.push_str(Theme::reset());
    out.push('\n');
}

fn modal_line(out: &mut String, theme: &Theme, text: &str, color: &Rgb, inner: usize) {
    let text = fit(text, inner);
    pad(out, MODAL_MARGIN);
    out.push_str(&Theme::fg(&theme.colors.modal_border));
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    pad(out, inner.saturating_sub(width(&text)));
    out.push_str(&Theme::fg(&theme.colors.modal_border));
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');
}
