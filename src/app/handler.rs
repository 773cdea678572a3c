//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user commands,
//! translating them into state changes and action sequences. It is the
//! primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Commands arrive from the shell as [`Event`]s
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the runtime to execute
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `Navigate`, `Refresh`, `ToggleView`
//! - **Sort and filter**: `RequestSort`, `Search`, `FilterDiscipline`, `FilterGender`
//! - **Modal**: `ShowDetails`, `Create`, `Edit`, `Delete`, `SetField`, `Submit`,
//!   `ConfirmDelete`, `CloseModal`
//! - **System**: `Quit`
//!
//! Rejected input (unknown sort key, invalid form value, command that does
//! not apply to the current page) becomes a notification, never an error.
//!
//! # Example
//!
//! ```rust
//! use trackside::app::{handle_event, Action, AppState, Event};
//! use trackside::app::modes::Page;
//! use trackside::domain::Collection;
//! use trackside::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (rerender, actions) = handle_event(&mut state, &Event::Navigate(Page::Items))?;
//! assert!(rerender);
//! assert_eq!(actions, vec![Action::Load(Collection::Items)]);
//! # Ok::<(), trackside::domain::TracksideError>(())
//! ```

use super::modes::{AthleteView, Modal, ModalMode, Page};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, TracksideError};
use crate::domain::Collection;
use crate::forms::{AthleteForm, Form, FormContext, ItemForm, ResultForm};
use crate::store::Notification;

/// User commands, one per shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shows a page; loads its collection first if the cache is empty.
    Navigate(Page),

    /// Reloads the current page's collection (and the catalog) regardless of
    /// cache state.
    Refresh,

    /// Toggles the sort directive of the current page's collection by key name.
    RequestSort(String),

    /// Replaces the results search text.
    Search(String),

    /// Replaces the results discipline criterion; empty clears it.
    FilterDiscipline(String),

    /// Replaces the results gender criterion; empty clears it.
    FilterGender(String),

    /// Switches the athletes page between cards and table.
    ToggleView,

    /// Opens the details modal for an entity of the current page and
    /// refreshes that entity from the API.
    ShowDetails(i64),

    /// Opens a blank create form for the current page.
    Create,

    /// Opens an edit form prefilled from an entity of the current page.
    Edit(i64),

    /// Opens the delete confirmation for an entity of the current page.
    Delete(i64),

    /// Sets one field of the open form.
    SetField {
        /// Field name as listed in the modal.
        field: String,
        /// Raw user input.
        value: String,
    },

    /// Validates the open form and emits the create or update.
    Submit,

    /// Emits the delete confirmed in the open modal.
    ConfirmDelete,

    /// Closes the modal without side effects.
    CloseModal,

    /// Leaves the console.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(rerender, actions)`: whether the frame changed, and the actions to run in
/// order. Actions are empty when the event needs no API call.
///
/// # Errors
///
/// Currently never fails; rejected input is reported through
/// `state.toasts`. The `Result` keeps the signature stable for handlers that
/// need to propagate.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate(page) => {
            state.page = *page;
            state.modal = None;
            Ok((true, initial_loads(state, *page)))
        }
        Event::Refresh => {
            let mut actions = Vec::new();
            if matches!(state.page, Page::Athletes | Page::Results) {
                actions.push(Action::LoadCatalog);
            }
            if state.page == Page::Results {
                actions.push(Action::Load(Collection::Athletes));
            }
            match state.page.collection() {
                Some(collection) => actions.push(Action::Load(collection)),
                None => {
                    actions.push(Action::LoadCatalog);
                    actions.extend(
                        [Collection::Athletes, Collection::Results, Collection::Items].map(Action::Load),
                    );
                }
            }
            tracing::info!(page = ?state.page, count = actions.len(), "refresh requested");
            Ok((true, actions))
        }
        Event::RequestSort(key) => {
            let direction = match state.page {
                Page::Athletes => state.athlete_sort.request_sort_named(key),
                Page::Results => state.result_sort.request_sort_named(key),
                Page::Items => state.item_sort.request_sort_named(key),
                Page::Info => None,
            };
            if direction.is_none() {
                let message = format!("Cannot sort {} by '{key}'", state.page.title().to_lowercase());
                reject(state, message);
                return Ok((true, vec![]));
            }
            if state.page == Page::Athletes {
                state.athlete_view = AthleteView::Table;
            }
            Ok((true, vec![]))
        }
        Event::Search(text) => {
            state.result_filter.set_search(text);
            state.apply_result_filter();
            Ok((true, vec![]))
        }
        Event::FilterDiscipline(name) => {
            state.result_filter.set_discipline(name);
            state.apply_result_filter();
            Ok((true, vec![]))
        }
        Event::FilterGender(code) => {
            state.result_filter.set_gender(code);
            state.apply_result_filter();
            Ok((true, vec![]))
        }
        Event::ToggleView => {
            if state.page != Page::Athletes {
                reject(state, "Only the athletes page has a card view");
                return Ok((true, vec![]));
            }
            state.athlete_view = state.athlete_view.toggled();
            Ok((true, vec![]))
        }
        Event::ShowDetails(id) => {
            let Some(collection) = page_collection(state) else {
                return Ok((true, vec![]));
            };
            if !cached(state, collection, *id) {
                reject(state, format!("No {} with id {id}", collection.noun()));
                return Ok((true, vec![]));
            }
            state.modal = Some(Modal::details(collection, *id));
            Ok((true, vec![Action::Fetch { collection, id: *id }]))
        }
        Event::Create => {
            let Some(collection) = page_collection(state) else {
                return Ok((true, vec![]));
            };
            state.modal = Some(Modal::create(collection));
            Ok((true, form_dependencies(state, collection)))
        }
        Event::Edit(id) => {
            let Some(collection) = page_collection(state) else {
                return Ok((true, vec![]));
            };
            let Some(form) = prefilled_form(state, collection, *id) else {
                reject(state, format!("No {} with id {id}", collection.noun()));
                return Ok((true, vec![]));
            };
            state.modal = Some(Modal::edit(*id, form));
            Ok((true, form_dependencies(state, collection)))
        }
        Event::Delete(id) => {
            let Some(collection) = page_collection(state) else {
                return Ok((true, vec![]));
            };
            if !cached(state, collection, *id) {
                reject(state, format!("No {} with id {id}", collection.noun()));
                return Ok((true, vec![]));
            }
            state.modal = Some(Modal::delete(collection, *id));
            Ok((true, vec![]))
        }
        Event::SetField { field, value } => {
            let ctx = FormContext {
                catalog: &state.data.catalog,
                athletes: state.data.athletes.items(),
            };
            let Some(form) = state.modal.as_mut().and_then(|m| m.form.as_mut()) else {
                reject(state, "No form is open");
                return Ok((true, vec![]));
            };
            if let Err(error) = form.set(field, value, &ctx) {
                state.toasts.push_error(&error);
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Some(modal) = state.modal.as_ref() else {
                reject(state, "No form is open");
                return Ok((true, vec![]));
            };
            let Some(form) = modal.form.as_ref() else {
                reject(state, "Nothing to submit");
                return Ok((true, vec![]));
            };
            let draft = match form.to_draft() {
                Ok(draft) => draft,
                Err(error) => {
                    state.toasts.push_error(&error);
                    return Ok((true, vec![]));
                }
            };
            let action = match (modal.mode, modal.target) {
                (ModalMode::Edit, Some(id)) => Action::Update { id, draft },
                _ => Action::Create(draft),
            };
            tracing::info!(%action, "form submitted");
            state.modal = None;
            Ok((true, vec![action]))
        }
        Event::ConfirmDelete => {
            let target = state
                .modal
                .as_ref()
                .filter(|m| m.mode == ModalMode::Delete)
                .and_then(|m| m.target.map(|id| (m.collection, id)));
            let Some((collection, id)) = target else {
                reject(state, "No deletion to confirm");
                return Ok((true, vec![]));
            };
            state.modal = None;
            Ok((true, vec![Action::Delete { collection, id }]))
        }
        Event::CloseModal => {
            let was_open = state.modal.take().is_some();
            Ok((was_open, vec![]))
        }
        Event::Quit => {
            state.should_quit = true;
            Ok((false, vec![Action::Quit]))
        }
    }
}

/// Loads a page needs on first visit; each is guarded by its cache being empty.
fn initial_loads(state: &AppState, page: Page) -> Vec<Action> {
    let mut actions = Vec::new();
    if matches!(page, Page::Athletes | Page::Results) && state.data.catalog.is_empty() {
        actions.push(Action::LoadCatalog);
    }
    if page == Page::Results && state.data.athletes.is_empty() {
        actions.push(Action::Load(Collection::Athletes));
    }
    if let Some(collection) = page.collection() {
        if state.data.is_empty(collection) {
            actions.push(Action::Load(collection));
        }
    }
    actions
}

/// Loads the open form's select options need.
fn form_dependencies(state: &AppState, collection: Collection) -> Vec<Action> {
    let mut actions = Vec::new();
    if collection != Collection::Items && state.data.catalog.is_empty() {
        actions.push(Action::LoadCatalog);
    }
    if collection == Collection::Results && state.data.athletes.is_empty() {
        actions.push(Action::Load(Collection::Athletes));
    }
    actions
}

fn page_collection(state: &mut AppState) -> Option<Collection> {
    let collection = state.page.collection();
    if collection.is_none() {
        reject(state, "Open athletes, results or items first");
    }
    collection
}

fn cached(state: &AppState, collection: Collection, id: i64) -> bool {
    match collection {
        Collection::Athletes => state.data.athletes.find(id).is_some(),
        Collection::Items => state.data.items.find(id).is_some(),
        Collection::Results => state.data.results.find(id).is_some(),
    }
}

fn prefilled_form(state: &AppState, collection: Collection, id: i64) -> Option<Form> {
    match collection {
        Collection::Athletes => state.data.athletes.find(id).map(|a| Form::Athlete(AthleteForm::from_athlete(a))),
        Collection::Items => state.data.items.find(id).map(|i| Form::Item(ItemForm::from_item(i))),
        Collection::Results => state.data.results.find(id).map(|r| Form::Result(ResultForm::from_result(r))),
    }
}

fn reject(state: &mut AppState, message: impl Into<String>) {
    let error = TracksideError::invalid(message);
    tracing::debug!(%error, "command rejected");
    state.toasts.push(Notification::from_error(&error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::store::EntityStore;
    use crate::ui::Theme;

    fn items_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.data.items = EntityStore::with_items(vec![
            Item { id: 1, name: "Hurdles".to_string() },
            Item { id: 2, name: "Baton".to_string() },
        ]);
        state.page = Page::Items;
        state
    }

    #[test]
    fn navigation_skips_load_when_cached() {
        let mut state = items_state();
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Page::Items)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn results_page_loads_catalog_and_athletes_first() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Page::Results)).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::LoadCatalog,
                Action::Load(Collection::Athletes),
                Action::Load(Collection::Results),
            ]
        );
    }

    #[test]
    fn unknown_sort_key_notifies_and_keeps_directive() {
        let mut state = items_state();
        handle_event(&mut state, &Event::RequestSort("name".into())).unwrap();
        let before = state.item_sort.directive();

        handle_event(&mut state, &Event::RequestSort("weight".into())).unwrap();

        assert_eq!(state.item_sort.directive(), before);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn submit_closes_modal_and_emits_update() {
        let mut state = items_state();
        handle_event(&mut state, &Event::Edit(2)).unwrap();
        handle_event(
            &mut state,
            &Event::SetField {
                field: "name".into(),
                value: "Relay baton".into(),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(state.modal.is_none());
        assert!(matches!(actions.as_slice(), [Action::Update { id: 2, .. }]));
    }

    #[test]
    fn invalid_submit_keeps_modal_open() {
        let mut state = items_state();
        handle_event(&mut state, &Event::Create).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(actions.is_empty());
        assert!(state.modal.is_some());
        assert_eq!(state.toasts.pending()[0].message, "Name is required");
    }

    #[test]
    fn confirm_delete_emits_delete_for_target() {
        let mut state = items_state();
        handle_event(&mut state, &Event::Delete(1)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert_eq!(
            actions,
            vec![Action::Delete {
                collection: Collection::Items,
                id: 1
            }]
        );
        assert!(state.modal.is_none());
    }

    #[test]
    fn details_for_unknown_id_is_rejected() {
        let mut state = items_state();
        handle_event(&mut state, &Event::ShowDetails(99)).unwrap();
        assert!(state.modal.is_none());
        assert_eq!(state.toasts.pending()[0].message, "No item with id 99");
    }
}
