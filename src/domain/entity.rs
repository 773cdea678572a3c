//! Identity and collection metadata shared by every editable entity.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;

/// Editable collections exposed by the API.
///
/// Each collection supports the full create/read/update/delete route set
/// under its base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Athletes,
    Items,
    Results,
}

impl Collection {
    /// Base path segment of the collection's endpoints.
    #[must_use]
    pub const fn base(self) -> &'static str {
        match self {
            Self::Athletes => "athletes",
            Self::Items => "items",
            Self::Results => "results",
        }
    }

    /// Singular noun used in notifications and modal titles.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Athletes => "athlete",
            Self::Items => "item",
            Self::Results => "result",
        }
    }
}

/// Read-only reference collections used by forms and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Clubs,
    Disciplines,
    TrackMeets,
}

impl CatalogKind {
    /// Base path segment of the catalog endpoint.
    #[must_use]
    pub const fn base(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Disciplines => "disciplines",
            Self::TrackMeets => "trackmeets",
        }
    }
}

/// A domain record with a stable server-assigned identity.
///
/// `Draft` is the partial shape sent on create and update; only populated
/// fields are serialized.
pub trait Entity: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Partial entity body for create/update requests.
    type Draft: Serialize + Debug + Clone + Send + Sync;

    /// The collection this entity belongs to.
    const COLLECTION: Collection;

    /// Server-assigned identity.
    fn id(&self) -> i64;

    /// Text used to refer to the entity in notifications.
    fn label(&self) -> String;
}

/// Reads an optional wire field where the backend writes `null` for "not set".
///
/// Use with `#[serde(default, deserialize_with = "null_as_default")]` so a
/// missing key and an explicit `null` both land on `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
