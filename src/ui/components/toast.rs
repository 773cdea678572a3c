//! Notification renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Renders one line per notification in the error color, prefixed with the
/// HTTP status when there is one.
pub fn render_toasts(out: &mut String, toasts: &[ToastInfo], theme: &Theme) {
    for toast in toasts {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.error_fg));
        match toast.status {
            Some(status) => out.push_str(&format!(" ! [{status}] {}", toast.message)),
            None => out.push_str(&format!(" ! {}", toast.message)),
        }
        out.push_str(Theme::reset());
        out.push('\n');
    }
}
