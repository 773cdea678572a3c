//! Edit and create forms.
//!
//! A form holds typed field state mirroring its entity. Fields are set one at
//! a time by name from shell input; each update is validated against the
//! [`FormContext`] (catalog and cached athletes). [`Form::to_draft`] checks the
//! required fields and builds the partial entity sent to the API.

pub mod athlete;
pub mod item;
pub mod result;

pub use athlete::AthleteForm;
pub use item::ItemForm;
pub use result::ResultForm;

use crate::app::actions::Draft;
use crate::domain::error::{Result, TracksideError};
use crate::domain::{Athlete, Collection};
use crate::store::Catalog;

/// Reference data a form validates against.
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub catalog: &'a Catalog,
    pub athletes: &'a [Athlete],
}

/// One field as shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Name used with `set <field> <value>`.
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    /// Selectable values as `id: label`, empty for free text.
    pub options: Vec<String>,
}

impl FieldView {
    fn text(name: &'static str, label: &'static str, value: impl Into<String>, required: bool) -> Self {
        Self {
            name,
            label,
            value: value.into(),
            required,
            options: Vec::new(),
        }
    }

    fn select(name: &'static str, label: &'static str, value: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name,
            label,
            value: value.into(),
            required: true,
            options,
        }
    }
}

/// Form hosted by an edit or create modal.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Athlete(AthleteForm),
    Result(ResultForm),
    Item(ItemForm),
}

impl Form {
    /// A blank form for the collection.
    #[must_use]
    pub fn blank(collection: Collection) -> Self {
        match collection {
            Collection::Athletes => Self::Athlete(AthleteForm::default()),
            Collection::Results => Self::Result(ResultForm::default()),
            Collection::Items => Self::Item(ItemForm::default()),
        }
    }

    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Athlete(_) => Collection::Athletes,
            Self::Result(_) => Collection::Results,
            Self::Item(_) => Collection::Items,
        }
    }

    /// Validates and stores one field.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::InvalidInput`] for unknown fields or rejected values;
    /// the form is unchanged in that case.
    pub fn set(&mut self, field: &str, value: &str, ctx: &FormContext<'_>) -> Result<()> {
        tracing::debug!(field, collection = self.collection().base(), "form field set");
        match self {
            Self::Athlete(form) => form.set(field, value, ctx.catalog),
            Self::Result(form) => form.set(field, value, ctx),
            Self::Item(form) => form.set(field, value),
        }
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self, ctx: &FormContext<'_>) -> Vec<FieldView> {
        match self {
            Self::Athlete(form) => form.fields(ctx.catalog),
            Self::Result(form) => form.fields(ctx),
            Self::Item(form) => form.fields(),
        }
    }

    /// Builds the request body.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::InvalidInput`] naming the first missing field.
    pub fn to_draft(&self) -> Result<Draft> {
        match self {
            Self::Athlete(form) => form.to_draft().map(Draft::Athlete),
            Self::Result(form) => form.to_draft().map(Draft::Result),
            Self::Item(form) => form.to_draft().map(Draft::Item),
        }
    }
}

fn unknown_field(field: &str) -> TracksideError {
    TracksideError::invalid(format!("unknown field '{field}'"))
}

fn required(label: &str) -> TracksideError {
    TracksideError::invalid(format!("{label} is required"))
}

fn parse_id(field: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| TracksideError::invalid(format!("{field} expects an id, got '{value}'")))
}
