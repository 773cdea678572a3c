//! Client-side caches of the remote collections.
//!
//! Each editable collection is held in an [`EntityStore`] that mirrors the
//! server after every successful call and converts failures into
//! [`Notification`]s. The read-only [`Catalog`] feeds forms and filters.

pub mod catalog;
pub mod entity_store;
pub mod toast;

pub use catalog::Catalog;
pub use entity_store::EntityStore;
pub use toast::{Notification, Toasts};
