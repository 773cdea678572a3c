//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never talks to the API itself. It returns a `Vec<Action>`
//! and the [`Executor`](crate::runtime::Executor) runs them in order against the
//! gateway, updating the shared caches.
//!
//! # Example
//!
//! ```rust
//! use trackside::app::{Action, Draft};
//! use trackside::domain::{Collection, ItemDraft};
//!
//! let actions = vec![
//!     Action::Load(Collection::Items),
//!     Action::Create(Draft::Item(ItemDraft { name: Some("Baton".into()) })),
//! ];
//! assert_eq!(actions[1].to_string(), "create item");
//! ```

use crate::domain::{AthleteDraft, Collection, ItemDraft, ResultDraft};

/// Partial entity body for a create or update.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Athlete(AthleteDraft),
    Item(ItemDraft),
    Result(ResultDraft),
}

impl Draft {
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Athlete(_) => Collection::Athletes,
            Self::Item(_) => Collection::Items,
            Self::Result(_) => Collection::Results,
        }
    }
}

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetches a whole collection into its store.
    Load(Collection),

    /// Fetches clubs, disciplines and track meets.
    LoadCatalog,

    /// Re-fetches one entity and upserts it into its store.
    Fetch {
        /// Collection holding the entity.
        collection: Collection,
        /// Identity of the entity to fetch.
        id: i64,
    },

    /// Creates an entity from a draft.
    Create(Draft),

    /// Applies a partial update to an existing entity.
    Update {
        /// Identity of the entity to update.
        id: i64,
        /// Fields to change.
        draft: Draft,
    },

    /// Deletes an entity.
    Delete {
        /// Collection holding the entity.
        collection: Collection,
        /// Identity of the entity to delete.
        id: i64,
    },

    /// Ends the shell session.
    Quit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(collection) => write!(f, "load {}", collection.base()),
            Self::LoadCatalog => f.write_str("load catalog"),
            Self::Fetch { collection, id } => write!(f, "fetch {} {id}", collection.noun()),
            Self::Create(draft) => write!(f, "create {}", draft.collection().noun()),
            Self::Update { id, draft } => write!(f, "update {} {id}", draft.collection().noun()),
            Self::Delete { collection, id } => write!(f, "delete {} {id}", collection.noun()),
            Self::Quit => f.write_str("quit"),
        }
    }
}
