//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like column widths, sort indicators and search highlight ranges.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use trackside::ui::viewmodel::{Cell, ColumnHeader, TableRow, TableView};
//!
//! let table = TableView {
//!     columns: vec![ColumnHeader { key: "name", label: "Name", class_token: "sorted-asc", width: 12 }],
//!     rows: vec![TableRow { id: 1, cells: vec![Cell::highlighted("Ann Holm", Some((0, 3)))] }],
//! };
//! assert_eq!(table.rows[0].cells[0].highlight, Some((0, 3)));
//! ```

use crate::app::modes::ModalMode;
use crate::forms::FieldView;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Brand and navigation tabs.
    pub header: HeaderInfo,

    /// Filter criteria, shown on the results page only.
    pub search_bar: Option<SearchBarInfo>,

    /// Page content.
    pub body: Body,

    /// Open modal, if any.
    pub modal: Option<ModalInfo>,

    /// Notifications raised since the last frame.
    pub toasts: Vec<ToastInfo>,

    /// Command hints for the current page and modal.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Brand mark on the left of the navigation bar.
    pub brand: String,

    /// One tab per page, in navigation order.
    pub tabs: Vec<TabInfo>,
}

/// A navigation tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub title: &'static str,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command help text (e.g., "sort <key> | search <text> | quit").
    pub keybindings: String,
}

/// Results filter criteria and their options.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search text (lowercased).
    pub query: String,

    /// Selected discipline name, empty for all.
    pub discipline: String,

    /// Selected gender code, empty for all.
    pub gender: String,

    /// Distinct discipline names from the catalog.
    pub discipline_options: Vec<String>,

    /// Gender choices as `code: label`.
    pub gender_options: Vec<String>,
}

/// What the page area shows.
#[derive(Debug, Clone)]
pub enum Body {
    /// Landing page.
    Info(InfoPanel),
    /// Sortable table.
    Table(TableView),
    /// Athlete card grid.
    Cards(Vec<CardInfo>),
    /// Nothing to show.
    Empty(EmptyState),
}

/// Landing page content.
#[derive(Debug, Clone)]
pub struct InfoPanel {
    pub brand: String,
    /// Current local date, e.g. "Monday, 19 October 2026".
    pub date: String,
    /// Current local time, e.g. "14:05".
    pub time: String,
    /// Cached collection sizes as `(label, count)`.
    pub counts: Vec<(&'static str, usize)>,
}

/// A table with resolved column layout.
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
}

/// A column header with its sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Sort key name accepted by `sort <key>`.
    pub key: &'static str,

    pub label: &'static str,

    /// `"sorted-asc"`, `"sorted-desc"` or empty.
    pub class_token: &'static str,

    /// Column width in characters, including the gap to the next column.
    pub width: usize,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<Cell>,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,

    /// Byte range of the search match inside `text`.
    pub highlight: Option<(usize, usize)>,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }

    #[must_use]
    pub fn highlighted(text: impl Into<String>, highlight: Option<(usize, usize)>) -> Self {
        Self {
            text: text.into(),
            highlight,
        }
    }
}

/// One athlete card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub id: i64,
    pub name: String,
    pub age_group: String,
    pub gender: String,
    pub club: String,
}

/// Modal panel content.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub mode: ModalMode,

    pub title: String,

    /// Read-only `(label, value)` lines for details and delete.
    pub lines: Vec<(String, String)>,

    /// Editable fields for edit and create.
    pub fields: Vec<FieldView>,

    /// Hint for the command that completes the modal.
    pub prompt: String,
}

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub message: String,
    pub status: Option<u16>,
}

/// Empty state message display information.
///
/// Shown when the page's collection has no rows (nothing loaded yet, or the
/// filter excludes everything).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No results match the current filter").
    pub message: String,

    /// Secondary explanatory text (e.g., "Clear the search to see all results").
    pub subtitle: String,
}
