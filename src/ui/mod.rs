//! Terminal frames.
//!
//! Rendering is a pure function of [`AppState`](crate::app::AppState): the
//! state computes a [`UIViewModel`] for the terminal width, and the
//! components append ANSI-styled text for each part of it to one `String`.
//!
//! ```text
//! AppState ──compute_viewmodel(cols)──▶ UIViewModel ──render──▶ String
//! ```
//!
//! A frame is, top to bottom: navigation bar, results criteria (results page
//! only), page body (info panel, table, athlete cards or empty state), open
//! modal, notifications and command hints.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Rgb, Theme};
pub use viewmodel::{
    Body, CardInfo, Cell, ColumnHeader, EmptyState, FooterInfo, HeaderInfo, InfoPanel, ModalInfo,
    SearchBarInfo, TabInfo, TableRow, TableView, ToastInfo, UIViewModel,
};
