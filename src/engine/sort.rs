//! Sort directive and comparator.
//!
//! A [`Sorter`] holds at most one [`SortDirective`]. Requesting the active key
//! while ascending flips it to descending; any other request starts ascending
//! on the requested key. Without a directive the input order is returned.

use super::keys::SortKey;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Direction of a sort directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to a natural-order comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Class token rendered next to the active column header.
    #[must_use]
    pub const fn class_token(self) -> &'static str {
        match self {
            Self::Ascending => "sorted-asc",
            Self::Descending => "sorted-desc",
        }
    }
}

/// The `{key, direction}` pair governing the current ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<K> {
    pub key: K,
    pub direction: SortDirection,
}

/// Sort state for one table, generic over the entity and its key set.
///
/// # Examples
///
/// ```
/// use trackside::domain::Item;
/// use trackside::engine::{ItemSortKey, SortDirection, Sorter};
///
/// let items = vec![
///     Item { id: 2, name: "Hurdles".into() },
///     Item { id: 1, name: "Baton".into() },
/// ];
/// let mut sorter = Sorter::<Item, ItemSortKey>::new();
/// assert_eq!(sorter.request_sort_named("name"), Some(SortDirection::Ascending));
/// assert_eq!(sorter.sorted(&items)[0].name, "Baton");
/// assert_eq!(sorter.class_for_name("name"), "sorted-asc");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sorter<E, K> {
    directive: Option<SortDirective<K>>,
    _entity: PhantomData<fn(&E)>,
}

impl<E, K: SortKey<E>> Default for Sorter<E, K> {
    fn default() -> Self {
        Self {
            directive: None,
            _entity: PhantomData,
        }
    }
}

impl<E: Clone, K: SortKey<E>> Sorter<E, K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn directive(&self) -> Option<SortDirective<K>> {
        self.directive
    }

    /// Drops the directive, restoring input order.
    pub fn clear(&mut self) {
        self.directive = None;
    }

    /// Toggles the directive for `key` and returns the new direction.
    pub fn request_sort(&mut self, key: K) -> SortDirection {
        let direction = match self.directive {
            Some(SortDirective {
                key: active,
                direction: SortDirection::Ascending,
            }) if active == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        tracing::debug!(key = key.name(), ?direction, "sort requested");
        self.directive = Some(SortDirective { key, direction });
        direction
    }

    /// Toggles by key name. Unknown names leave the directive unchanged.
    pub fn request_sort_named(&mut self, name: &str) -> Option<SortDirection> {
        let Some(key) = K::parse(name) else {
            tracing::debug!(name, "ignoring unknown sort key");
            return None;
        };
        Some(self.request_sort(key))
    }

    /// `"sorted-asc"`, `"sorted-desc"` or `""` for a column key.
    #[must_use]
    pub fn class_for(&self, key: K) -> &'static str {
        match self.directive {
            Some(directive) if directive.key == key => directive.direction.class_token(),
            _ => "",
        }
    }

    /// Like [`class_for`](Self::class_for) by key name.
    #[must_use]
    pub fn class_for_name(&self, name: &str) -> &'static str {
        K::parse(name).map_or("", |key| self.class_for(key))
    }

    /// Returns a stably sorted copy of `items`.
    #[must_use]
    pub fn sorted(&self, items: &[E]) -> Vec<E> {
        let mut out = items.to_vec();
        let Some(directive) = self.directive else {
            return out;
        };

        let _span = tracing::debug_span!(
            "sort",
            key = directive.key.name(),
            direction = ?directive.direction,
            count = items.len()
        )
        .entered();

        out.sort_by(|a, b| {
            let natural = directive
                .key
                .extract(a)
                .compare(&directive.key.extract(b));
            directive.direction.apply(natural)
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::engine::keys::ItemSortKey;

    fn items() -> Vec<Item> {
        vec![
            Item { id: 3, name: "b".into() },
            Item { id: 1, name: "a".into() },
            Item { id: 2, name: "b".into() },
        ]
    }

    #[test]
    fn toggles_only_from_ascending_on_same_key() {
        let mut sorter = Sorter::<Item, ItemSortKey>::new();
        assert_eq!(sorter.request_sort(ItemSortKey::Id), SortDirection::Ascending);
        assert_eq!(sorter.request_sort(ItemSortKey::Id), SortDirection::Descending);
        assert_eq!(sorter.request_sort(ItemSortKey::Id), SortDirection::Ascending);
        sorter.request_sort(ItemSortKey::Id);
        assert_eq!(sorter.request_sort(ItemSortKey::Name), SortDirection::Ascending);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut sorter = Sorter::<Item, ItemSortKey>::new();
        sorter.request_sort(ItemSortKey::Name);
        let ids: Vec<i64> = sorter.sorted(&items()).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        sorter.request_sort(ItemSortKey::Name);
        let ids: Vec<i64> = sorter.sorted(&items()).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut sorter = Sorter::<Item, ItemSortKey>::new();
        sorter.request_sort(ItemSortKey::Id);
        let before = sorter.directive();
        assert_eq!(sorter.request_sort_named("weight"), None);
        assert_eq!(sorter.directive(), before);
        assert_eq!(sorter.class_for_name("weight"), "");
    }

    #[test]
    fn class_tokens_follow_directive() {
        let mut sorter = Sorter::<Item, ItemSortKey>::new();
        assert_eq!(sorter.class_for(ItemSortKey::Id), "");
        sorter.request_sort(ItemSortKey::Id);
        assert_eq!(sorter.class_for(ItemSortKey::Id), "sorted-asc");
        assert_eq!(sorter.class_for(ItemSortKey::Name), "");
        sorter.request_sort(ItemSortKey::Id);
        assert_eq!(sorter.class_for(ItemSortKey::Id), "sorted-desc");
    }
}
