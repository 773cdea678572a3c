//! Item form.

use super::{required, unknown_field, FieldView};
use crate::domain::error::Result;
use crate::domain::{Item, ItemDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
}

impl ItemForm {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
        }
    }

    pub(super) fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "name" => {
                self.name = value.trim().to_string();
                Ok(())
            }
            other => Err(unknown_field(other)),
        }
    }

    pub(super) fn fields(&self) -> Vec<FieldView> {
        vec![FieldView::text("name", "Name", self.name.clone(), true)]
    }

    /// # Errors
    ///
    /// Fails when the name is blank.
    pub fn to_draft(&self) -> Result<ItemDraft> {
        if self.name.is_empty() {
            return Err(required("Name"));
        }
        Ok(ItemDraft {
            name: Some(self.name.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_on_submit() {
        let mut form = ItemForm::default();
        assert!(form.to_draft().is_err());
        form.set("name", "  Baton ").unwrap();
        assert_eq!(form.to_draft().unwrap().name.as_deref(), Some("Baton"));
        assert!(form.set("weight", "2").is_err());
    }
}
