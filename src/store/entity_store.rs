//! Per-collection cache with server-synchronizing operations.
//!
//! An [`EntityStore`] owns the client copy of one collection. Successful calls
//! apply the cache-consistency rule (insert on create, replace by identity on
//! edit, remove by identity on delete). Failed calls leave the cache as it was
//! and push exactly one notification.

use super::toast::Toasts;
use crate::domain::Entity;
use crate::gateway::{client, Gateway};
use tracing::Instrument;

/// Cached collection of `E` plus its loading flag.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    items: Vec<E>,
    is_loading: bool,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
        }
    }
}

impl<E: Entity> EntityStore<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `items`.
    #[must_use]
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items,
            is_loading: false,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Finds a cached entity by identity.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Replaces the whole cache.
    pub fn replace_all(&mut self, items: Vec<E>) {
        self.items = items;
    }

    /// Loads the full collection, replacing the cache.
    ///
    /// Returns the loaded entities, or an empty vector on failure (the cache is
    /// then unchanged).
    pub async fn list<G: Gateway + ?Sized>(&mut self, gateway: &G, toasts: &mut Toasts) -> Vec<E> {
        let span = tracing::debug_span!("store_list", collection = E::COLLECTION.base());
        self.is_loading = true;
        let outcome = client::fetch_all::<E, G>(gateway).instrument(span).await;
        self.is_loading = false;

        match outcome {
            Ok(items) => {
                tracing::debug!(count = items.len(), collection = E::COLLECTION.base(), "collection loaded");
                self.items.clone_from(&items);
                items
            }
            Err(e) => {
                toasts.push_error(&e);
                Vec::new()
            }
        }
    }

    /// Fetches one entity and upserts it into the cache by identity.
    pub async fn get_by_id<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        id: i64,
        toasts: &mut Toasts,
    ) -> Option<E> {
        match client::fetch_one::<E, G>(gateway, id).await {
            Ok(entity) => {
                self.upsert(entity.clone());
                Some(entity)
            }
            Err(e) => {
                toasts.push_error(&e);
                None
            }
        }
    }

    /// Creates an entity on the server and appends the stored version.
    pub async fn create<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        draft: &E::Draft,
        toasts: &mut Toasts,
    ) -> Option<E> {
        let span = tracing::debug_span!("store_create", collection = E::COLLECTION.base());
        match client::create::<E, G>(gateway, draft).instrument(span).await {
            Ok(entity) => {
                tracing::info!(id = entity.id(), label = %entity.label(), "{} created", E::COLLECTION.noun());
                self.items.push(entity.clone());
                Some(entity)
            }
            Err(e) => {
                toasts.push_error(&e);
                None
            }
        }
    }

    /// Applies a partial update and replaces the cached entity with the stored one.
    pub async fn update<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        id: i64,
        draft: &E::Draft,
        toasts: &mut Toasts,
    ) -> Option<E> {
        let span = tracing::debug_span!("store_update", collection = E::COLLECTION.base(), id);
        match client::update::<E, G>(gateway, id, draft).instrument(span).await {
            Ok(entity) => {
                tracing::info!(id, "{} updated", E::COLLECTION.noun());
                for cached in self.items.iter_mut().filter(|c| c.id() == id) {
                    *cached = entity.clone();
                }
                Some(entity)
            }
            Err(e) => {
                toasts.push_error(&e);
                None
            }
        }
    }

    /// Deletes an entity; the cache drops it only when the server accepted.
    pub async fn delete<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        id: i64,
        toasts: &mut Toasts,
    ) -> bool {
        let span = tracing::debug_span!("store_delete", collection = E::COLLECTION.base(), id);
        match client::delete::<E, G>(gateway, id).instrument(span).await {
            Ok(()) => {
                tracing::info!(id, "{} deleted", E::COLLECTION.noun());
                self.items.retain(|e| e.id() != id);
                true
            }
            Err(e) => {
                toasts.push_error(&e);
                false
            }
        }
    }

    fn upsert(&mut self, entity: E) {
        match self.items.iter_mut().find(|c| c.id() == entity.id()) {
            Some(cached) => *cached = entity,
            None => self.items.push(entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemDraft};
    use crate::gateway::{routes, MemoryGateway, Verb};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn get_by_id_upserts_without_dropping_others() {
        let gateway = MemoryGateway::with_demo_data();
        let mut toasts = Toasts::new();
        let mut store = EntityStore::<Item>::with_items(vec![Item {
            id: 1,
            name: "stale".into(),
        }]);

        block_on(store.get_by_id(&gateway, 2, &mut toasts));
        block_on(store.get_by_id(&gateway, 1, &mut toasts));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find(1).map(|i| i.name.as_str()), Some("Starting blocks"));
        assert!(toasts.is_empty());
    }

    #[test]
    fn rejected_delete_keeps_entity() {
        let gateway = MemoryGateway::with_demo_data();
        gateway.fail_on(Verb::Delete, &routes::delete("items", 1), 403);
        let mut toasts = Toasts::new();
        let mut store = EntityStore::<Item>::new();
        block_on(store.list(&gateway, &mut toasts));

        assert!(!block_on(store.delete(&gateway, 1, &mut toasts)));
        assert!(store.find(1).is_some());
        assert_eq!(toasts.pending()[0].status, Some(403));
    }

    #[test]
    fn failed_create_leaves_cache_alone() {
        let gateway = MemoryGateway::new();
        gateway.fail_on(Verb::Post, &routes::create("items"), 500);
        let mut toasts = Toasts::new();
        let mut store = EntityStore::<Item>::new();
        let draft = ItemDraft {
            name: Some("Baton".into()),
        };

        assert!(block_on(store.create(&gateway, &draft, &mut toasts)).is_none());
        assert!(store.is_empty());
        assert_eq!(toasts.len(), 1);
    }
}
