//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to a `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Brand mark and navigation tabs
//! - [`footer`]: Command hints
//! - [`search`]: Results filter box
//! - [`table`]: Sortable table with sort indicators and match highlights
//! - [`cards`]: Athlete card grid
//! - [`modal`]: Details, delete, edit and create panels
//! - [`toast`]: Error notifications
//! - [`empty`]: Empty state message and landing page
//!
//! # Layout
//!
//! [`render_frame`] stacks the components top to bottom:
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - results page only]
//! [Body: info | table | cards | empty state]
//! [Modal - when open]
//! [Toasts]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod table;
mod toast;

pub use cards::render_cards;
pub use empty::{render_empty_state, render_info};
pub use footer::render_footer;
pub use header::render_header;
pub use modal::render_modal;
pub use search::render_search_bar;
pub use table::{render_table, render_table_headers};
pub use toast::render_toasts;

use crate::ui::theme::{Rgb, Theme};
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders a horizontal border line.
///
/// Used to separate UI sections (header/body, body/footer).
fn render_border(out: &mut String, color: &Rgb, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders every part of the view model in layout order.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        render_search_bar(out, search, theme, cols);
    }

    match &vm.body {
        Body::Info(info) => render_info(out, info, theme, cols),
        Body::Table(table) => render_table(out, table, theme),
        Body::Cards(cards) => render_cards(out, cards, theme, cols),
        Body::Empty(empty) => render_empty_state(out, empty, theme, cols),
    }

    if let Some(modal) = &vm.modal {
        render_modal(out, modal, theme, cols);
    }

    render_toasts(out, &vm.toasts, theme);

    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
