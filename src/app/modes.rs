//! Page, view and modal state types for the application.
//!
//! These types decide what the console shows and which commands apply:
//! - [`Page`]: the section being displayed (replaces routes)
//! - [`AthleteView`]: card grid or sortable table for athletes
//! - [`ModalMode`] and [`Modal`]: the four-way modal flag plus its target
//!
//! # Example
//!
//! ```rust
//! use trackside::app::modes::{AthleteView, Page};
//!
//! let page = Page::parse("results");
//! assert_eq!(page, Some(Page::Results));
//! assert_eq!(AthleteView::Card.toggled(), AthleteView::Table);
//! ```

use crate::domain::Collection;
use crate::forms::Form;

/// Top-level sections of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page with the current date and collection counts.
    #[default]
    Info,
    Athletes,
    Results,
    Items,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Athletes, Self::Results, Self::Items];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Athletes => "ATHLETES",
            Self::Results => "RESULTS",
            Self::Items => "ITEMS",
        }
    }

    /// The editable collection shown on the page, if any.
    #[must_use]
    pub const fn collection(self) -> Option<Collection> {
        match self {
            Self::Info => None,
            Self::Athletes => Some(Collection::Athletes),
            Self::Results => Some(Collection::Results),
            Self::Items => Some(Collection::Items),
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "info" | "home" => Some(Self::Info),
            "athletes" => Some(Self::Athletes),
            "results" => Some(Self::Results),
            "items" => Some(Self::Items),
            _ => None,
        }
    }
}

/// How the athletes page lays out its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AthleteView {
    /// One card per athlete with name, age group, gender and club.
    #[default]
    Card,
    /// Sortable table with one column per field.
    Table,
}

impl AthleteView {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Card => Self::Table,
            Self::Table => Self::Card,
        }
    }
}

/// What an open modal is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    /// Read-only view of every field of the target.
    Details,
    /// Confirmation before deleting the target.
    Delete,
    /// Form prefilled from the target.
    Edit,
    /// Blank form.
    Create,
}

/// An open modal. No modal means closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub mode: ModalMode,
    pub collection: Collection,
    /// Identity of the entity the modal acts on; `None` for create.
    pub target: Option<i64>,
    /// Form state for edit and create.
    pub form: Option<Form>,
}

impl Modal {
    #[must_use]
    pub const fn details(collection: Collection, id: i64) -> Self {
        Self {
            mode: ModalMode::Details,
            collection,
            target: Some(id),
            form: None,
        }
    }

    #[must_use]
    pub const fn delete(collection: Collection, id: i64) -> Self {
        Self {
            mode: ModalMode::Delete,
            collection,
            target: Some(id),
            form: None,
        }
    }

    #[must_use]
    pub fn edit(id: i64, form: Form) -> Self {
        Self {
            mode: ModalMode::Edit,
            collection: form.collection(),
            target: Some(id),
            form: Some(form),
        }
    }

    #[must_use]
    pub fn create(collection: Collection) -> Self {
        Self {
            mode: ModalMode::Create,
            collection,
            target: None,
            form: Some(Form::blank(collection)),
        }
    }
}
