//! Action executor for the single-threaded runtime.
//!
//! Network calls are the only suspension points. Actions run sequentially, so
//! the shared state needs no locking; there is no de-duplication,
//! cancellation or timeout policy and the last response wins.

use crate::app::{Action, AppState, Draft};
use crate::domain::Collection;
use crate::gateway::Gateway;
use crate::store::Catalog;
use std::sync::Arc;
use tracing::Instrument;

/// Runs actions against a gateway, updating the application state.
#[derive(Clone)]
pub struct Executor {
    gateway: Arc<dyn Gateway>,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

impl Executor {
    #[must_use]
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// The gateway actions run against.
    #[must_use]
    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    /// Executes actions in order.
    ///
    /// # Returns
    ///
    /// `false` once a [`Action::Quit`] was executed, `true` otherwise.
    pub async fn execute_all(&self, state: &mut AppState, actions: Vec<Action>) -> bool {
        for action in actions {
            if !self.execute(state, action).await {
                return false;
            }
        }
        true
    }

    /// Executes one action.
    ///
    /// Store failures are already turned into notifications by the stores;
    /// catalog failures are turned into one here. Whenever the results cache
    /// may have changed, the results filter is reapplied with its current
    /// criteria.
    ///
    /// # Returns
    ///
    /// `false` for [`Action::Quit`], `true` otherwise.
    pub async fn execute(&self, state: &mut AppState, action: Action) -> bool {
        let span = tracing::info_span!("execute", action = %action);
        self.dispatch(state, action).instrument(span).await
    }

    async fn dispatch(&self, state: &mut AppState, action: Action) -> bool {
        let gateway = self.gateway.as_ref();
        let results_touched = touches_results(&action);
        let data = &mut state.data;
        let toasts = &mut state.toasts;

        match action {
            Action::Load(Collection::Athletes) => {
                data.athletes.list(gateway, toasts).await;
            }
            Action::Load(Collection::Items) => {
                data.items.list(gateway, toasts).await;
            }
            Action::Load(Collection::Results) => {
                data.results.list(gateway, toasts).await;
            }
            Action::LoadCatalog => match Catalog::load(gateway).await {
                Ok(catalog) => data.catalog = catalog,
                Err(error) => toasts.push_error(&error),
            },
            Action::Fetch { collection, id } => match collection {
                Collection::Athletes => {
                    data.athletes.get_by_id(gateway, id, toasts).await;
                }
                Collection::Items => {
                    data.items.get_by_id(gateway, id, toasts).await;
                }
                Collection::Results => {
                    data.results.get_by_id(gateway, id, toasts).await;
                }
            },
            Action::Create(draft) => match draft {
                Draft::Athlete(draft) => {
                    data.athletes.create(gateway, &draft, toasts).await;
                }
                Draft::Item(draft) => {
                    data.items.create(gateway, &draft, toasts).await;
                }
                Draft::Result(draft) => {
                    data.results.create(gateway, &draft, toasts).await;
                }
            },
            Action::Update { id, draft } => match draft {
                Draft::Athlete(draft) => {
                    data.athletes.update(gateway, id, &draft, toasts).await;
                }
                Draft::Item(draft) => {
                    data.items.update(gateway, id, &draft, toasts).await;
                }
                Draft::Result(draft) => {
                    data.results.update(gateway, id, &draft, toasts).await;
                }
            },
            Action::Delete { collection, id } => match collection {
                Collection::Athletes => {
                    data.athletes.delete(gateway, id, toasts).await;
                }
                Collection::Items => {
                    data.items.delete(gateway, id, toasts).await;
                }
                Collection::Results => {
                    data.results.delete(gateway, id, toasts).await;
                }
            },
            Action::Quit => {
                tracing::info!("quit requested");
                return false;
            }
        }

        if results_touched {
            state.apply_result_filter();
        }
        true
    }
}

fn touches_results(action: &Action) -> bool {
    match action {
        Action::Load(collection) | Action::Fetch { collection, .. } | Action::Delete { collection, .. } => {
            *collection == Collection::Results
        }
        Action::Create(draft) | Action::Update { draft, .. } => draft.collection() == Collection::Results,
        Action::LoadCatalog | Action::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemDraft;
    use crate::gateway::{MemoryGateway, Verb};
    use crate::ui::Theme;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn loading_results_refreshes_filtered_view() {
        let executor = Executor::new(Arc::new(MemoryGateway::with_demo_data()));
        let mut state = AppState::new(Theme::default());
        state.result_filter.set_search("ann");

        block_on(executor.execute(&mut state, Action::Load(Collection::Results)));

        assert!(!state.data.results.is_empty());
        assert!(!state.filtered_results.is_empty());
        assert!(state.filtered_results.iter().all(|r| r.athlete.name.contains("Ann")));
    }

    #[test]
    fn catalog_failure_becomes_notification() {
        let gateway = Arc::new(MemoryGateway::with_demo_data());
        gateway.fail_on(Verb::Get, "clubs/all", 500);
        let executor = Executor::new(gateway);
        let mut state = AppState::new(Theme::default());

        block_on(executor.execute(&mut state, Action::LoadCatalog));

        assert!(state.data.catalog.is_empty());
        assert_eq!(state.toasts.pending()[0].status, Some(500));
    }

    #[test]
    fn quit_stops_the_batch() {
        let executor = Executor::new(Arc::new(MemoryGateway::with_demo_data()));
        let mut state = AppState::new(Theme::default());
        let create = Action::Create(Draft::Item(ItemDraft {
            name: Some("Baton".to_string()),
        }));

        let running = block_on(executor.execute_all(&mut state, vec![Action::Quit, create]));

        assert!(!running);
        assert!(state.data.items.is_empty());
    }
}
