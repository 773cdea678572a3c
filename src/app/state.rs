//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! console, along with the derived results view and UI view model generation.
//! It is the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data ([`SharedData`]: the cached collections and
//! the catalog) from derived state (the filtered results) so that every
//! derived view can be recomputed from the authoritative source. View models
//! are computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Shared data**: athletes, items and results stores plus the catalog
//! - **Page**: which section is displayed
//! - **Sorters**: one sort directive per sortable collection
//! - **Result filter**: search, discipline and gender criteria
//! - **Filtered results**: results passing the filter, in source order
//! - **Modal**: open details/delete/edit/create panel
//! - **Toasts**: notifications waiting to be shown
//!
//! # Example
//!
//! ```rust
//! use trackside::app::AppState;
//! use trackside::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.result_filter.set_search("ann");
//! state.apply_result_filter();
//! let viewmodel = state.compute_viewmodel(80);
//! assert_eq!(viewmodel.header.tabs.len(), 4);
//! ```

use super::modes::{AthleteView, Modal, ModalMode, Page};
use crate::domain::{Athlete, Collection, Entity, Item, ResultEntry};
use crate::engine::filter::GENDER_OPTIONS;
use crate::engine::{AthleteSortKey, ItemSortKey, ResultFilter, ResultSortKey, Sorter};
use crate::forms::FormContext;
use crate::store::{Catalog, EntityStore, Toasts};
use crate::ui::helpers::width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardInfo, Cell, ColumnHeader, EmptyState, FooterInfo, HeaderInfo, InfoPanel, ModalInfo,
    SearchBarInfo, TabInfo, TableRow, TableView, ToastInfo, UIViewModel,
};

/// Brand mark shown in the navigation bar and on the landing page.
pub const BRAND: &str = "I | A";

/// Narrowest column the table layout will produce.
const MIN_COLUMN_WIDTH: usize = 8;

/// Cached collections shared by every page.
///
/// Created once at start-up and passed by reference; the stores are the only
/// place entities are cached.
#[derive(Debug, Clone, Default)]
pub struct SharedData {
    pub athletes: EntityStore<Athlete>,
    pub items: EntityStore<Item>,
    pub results: EntityStore<ResultEntry>,
    /// Clubs, disciplines and track meets.
    pub catalog: Catalog,
}

impl SharedData {
    /// Whether the store for `collection` holds no entities.
    #[must_use]
    pub fn is_empty(&self, collection: Collection) -> bool {
        match collection {
            Collection::Athletes => self.athletes.is_empty(),
            Collection::Items => self.items.is_empty(),
            Collection::Results => self.results.is_empty(),
        }
    }
}

/// Central application state container.
///
/// Mutated by the event handler in response to user commands and by the
/// runtime when API calls complete. View models are computed on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cached collections and catalog.
    pub data: SharedData,

    /// Section currently displayed.
    pub page: Page,

    /// Card or table layout of the athletes page.
    pub athlete_view: AthleteView,

    pub athlete_sort: Sorter<Athlete, AthleteSortKey>,
    pub result_sort: Sorter<ResultEntry, ResultSortKey>,
    pub item_sort: Sorter<Item, ItemSortKey>,

    /// Results filter criteria.
    pub result_filter: ResultFilter,

    /// Results passing `result_filter`, in source order.
    ///
    /// Recomputed by `apply_result_filter()` whenever a criterion or the
    /// results cache changes.
    pub filtered_results: Vec<ResultEntry>,

    /// Open modal; `None` when closed.
    pub modal: Option<Modal>,

    /// Notifications not yet shown.
    pub toasts: Toasts,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Set once the user asked to leave.
    pub should_quit: bool,
}

impl AppState {
    /// Creates an empty application state on the info page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trackside::app::{AppState, modes::Page};
    /// use trackside::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert_eq!(state.page, Page::Info);
    /// assert!(state.modal.is_none());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_data(SharedData::default(), theme)
    }

    /// Creates a state over already populated data.
    #[must_use]
    pub fn with_data(data: SharedData, theme: Theme) -> Self {
        let mut state = Self {
            data,
            page: Page::default(),
            athlete_view: AthleteView::default(),
            athlete_sort: Sorter::new(),
            result_sort: Sorter::new(),
            item_sort: Sorter::new(),
            result_filter: ResultFilter::new(),
            filtered_results: Vec::new(),
            modal: None,
            toasts: Toasts::new(),
            theme,
            should_quit: false,
        };
        state.apply_result_filter();
        state
    }

    /// Reference data for form validation.
    #[must_use]
    pub fn form_context(&self) -> FormContext<'_> {
        FormContext {
            catalog: &self.data.catalog,
            athletes: self.data.athletes.items(),
        }
    }

    /// Recomputes `filtered_results` from the full results cache using the
    /// current value of every criterion.
    pub fn apply_result_filter(&mut self) {
        self.filtered_results = self.result_filter.apply(self.data.results.items());
    }

    /// Athletes in display order.
    #[must_use]
    pub fn visible_athletes(&self) -> Vec<Athlete> {
        self.athlete_sort.sorted(self.data.athletes.items())
    }

    /// Filtered results in display order; sorting runs after filtering.
    #[must_use]
    pub fn visible_results(&self) -> Vec<ResultEntry> {
        let _span = tracing::debug_span!(
            "visible_results",
            filtered = self.filtered_results.len(),
            sort = ?self.result_sort.directive()
        )
        .entered();
        self.result_sort.sorted(&self.filtered_results)
    }

    /// Items in display order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.item_sort.sorted(self.data.items.items())
    }

    /// Computes a renderable UI view model for the given terminal width.
    ///
    /// # Parameters
    ///
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] with the header tabs, the page body, the search bar on
    /// the results page, the open modal, pending notifications and the footer.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let body = match self.page {
            Page::Info => Body::Info(self.compute_info()),
            Page::Athletes => self.compute_athletes_body(cols),
            Page::Results => self.compute_results_body(cols),
            Page::Items => self.compute_items_body(cols),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body,
            modal: self.compute_modal(),
            toasts: self
                .toasts
                .pending()
                .iter()
                .map(|n| ToastInfo {
                    message: n.message.clone(),
                    status: n.status,
                })
                .collect(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            brand: BRAND.to_string(),
            tabs: Page::ALL
                .iter()
                .map(|&page| TabInfo {
                    title: page.title(),
                    is_active: page == self.page,
                })
                .collect(),
        }
    }

    fn compute_info(&self) -> InfoPanel {
        let now = chrono::Local::now();
        InfoPanel {
            brand: BRAND.to_string(),
            date: now.format("%A, %-d %B %Y").to_string(),
            time: now.format("%H:%M").to_string(),
            counts: vec![
                ("Athletes", self.data.athletes.len()),
                ("Results", self.data.results.len()),
                ("Items", self.data.items.len()),
                ("Clubs", self.data.catalog.clubs.len()),
                ("Disciplines", self.data.catalog.disciplines.len()),
                ("Track meets", self.data.catalog.track_meets.len()),
            ],
        }
    }

    fn compute_athletes_body(&self, cols: usize) -> Body {
        if self.data.athletes.is_empty() {
            return Body::Empty(Self::collection_empty_state(
                Collection::Athletes,
                self.data.athletes.is_loading(),
            ));
        }

        let athletes = self.visible_athletes();
        match self.athlete_view {
            AthleteView::Card => Body::Cards(
                athletes
                    .iter()
                    .map(|a| CardInfo {
                        id: a.id,
                        name: a.name.clone(),
                        age_group: a.age_group.clone(),
                        gender: a.gender.clone(),
                        club: a.club.name.clone(),
                    })
                    .collect(),
            ),
            AthleteView::Table => {
                let rows = athletes
                    .iter()
                    .map(|a| TableRow {
                        id: a.id,
                        cells: vec![
                            Cell::plain(&a.name),
                            Cell::plain(a.age.to_string()),
                            Cell::plain(&a.gender),
                            Cell::plain(&a.age_group),
                            Cell::plain(&a.club.name),
                        ],
                    })
                    .collect();
                let columns = [
                    ("name", "Name"),
                    ("age", "Age"),
                    ("gender", "Gender"),
                    ("athleteAgeGroupEnum", "Age Group"),
                    ("club.name", "Club"),
                ];
                Body::Table(layout_table(&columns, rows, |key| self.athlete_sort.class_for_name(key), cols))
            }
        }
    }

    fn compute_results_body(&self, cols: usize) -> Body {
        if self.data.results.is_empty() {
            return Body::Empty(Self::collection_empty_state(
                Collection::Results,
                self.data.results.is_loading(),
            ));
        }
        if self.filtered_results.is_empty() {
            return Body::Empty(EmptyState {
                message: "No results match the current filter".to_string(),
                subtitle: "Clear the search, discipline or gender to see all results".to_string(),
            });
        }

        let rows = self
            .visible_results()
            .iter()
            .map(|r| TableRow {
                id: r.id,
                cells: vec![
                    Cell::plain(&r.track_meet.name),
                    Cell::plain(r.date.format("%Y-%m-%d").to_string()),
                    Cell::highlighted(&r.athlete.name, self.result_filter.match_range(&r.athlete.name)),
                    Cell::highlighted(
                        &r.discipline.name,
                        self.result_filter.match_range(&r.discipline.name),
                    ),
                    Cell::plain(r.result_type().as_str()),
                    Cell::plain(r.measurement.to_string()),
                ],
            })
            .collect();
        let columns = [
            ("trackMeet.name", "Track Meet"),
            ("date", "Date"),
            ("athlete.name", "Athlete"),
            ("discipline.name", "Discipline"),
            ("resultType", "Result Type"),
            ("result", "Result"),
        ];
        Body::Table(layout_table(&columns, rows, |key| self.result_sort.class_for_name(key), cols))
    }

    fn compute_items_body(&self, cols: usize) -> Body {
        if self.data.items.is_empty() {
            return Body::Empty(Self::collection_empty_state(
                Collection::Items,
                self.data.items.is_loading(),
            ));
        }

        let rows = self
            .visible_items()
            .iter()
            .map(|i| TableRow {
                id: i.id,
                cells: vec![Cell::plain(i.id.to_string()), Cell::plain(&i.name)],
            })
            .collect();
        Body::Table(layout_table(
            &[("id", "Id"), ("name", "Name")],
            rows,
            |key| self.item_sort.class_for_name(key),
            cols,
        ))
    }

    fn collection_empty_state(collection: Collection, is_loading: bool) -> EmptyState {
        if is_loading {
            EmptyState {
                message: format!("Loading {}...", collection.base()),
                subtitle: "Waiting for the API".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No {} yet", collection.base()),
                subtitle: "Use 'new' to create one or 'refresh' to reload".to_string(),
            }
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.page == Page::Results).then(|| SearchBarInfo {
            query: self.result_filter.search().to_string(),
            discipline: self.result_filter.discipline().to_string(),
            gender: self.result_filter.gender().to_string(),
            discipline_options: self.data.catalog.discipline_names(),
            gender_options: GENDER_OPTIONS
                .iter()
                .map(|(code, label)| format!("{code}: {label}"))
                .collect(),
        })
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        let modal = self.modal.as_ref()?;
        let noun = modal.collection.noun();

        let info = match modal.mode {
            ModalMode::Details | ModalMode::Delete => {
                let target = modal.target.and_then(|id| self.describe(modal.collection, id));
                let (label, lines) = target.unwrap_or_else(|| (format!("{noun} not found"), Vec::new()));
                if modal.mode == ModalMode::Details {
                    ModalInfo {
                        mode: modal.mode,
                        title: format!("{} details: {label}", capitalize(noun)),
                        lines,
                        fields: Vec::new(),
                        prompt: format!("edit {} | delete {} | close", target_id(modal), target_id(modal)),
                    }
                } else {
                    ModalInfo {
                        mode: modal.mode,
                        title: format!("Delete {noun} {label}?"),
                        lines,
                        fields: Vec::new(),
                        prompt: "confirm | close".to_string(),
                    }
                }
            }
            ModalMode::Edit | ModalMode::Create => {
                let title = match modal.target {
                    Some(id) => format!("Edit {noun} #{id}"),
                    None => format!("New {noun}"),
                };
                ModalInfo {
                    mode: modal.mode,
                    title,
                    lines: Vec::new(),
                    fields: modal
                        .form
                        .as_ref()
                        .map(|form| form.fields(&self.form_context()))
                        .unwrap_or_default(),
                    prompt: "set <field> <value> | submit | close".to_string(),
                }
            }
        };
        Some(info)
    }

    /// Label and `(field, value)` lines for a cached entity.
    fn describe(&self, collection: Collection, id: i64) -> Option<(String, Vec<(String, String)>)> {
        let line = |label: &str, value: String| (label.to_string(), value);
        match collection {
            Collection::Athletes => self.data.athletes.find(id).map(|a| {
                (
                    a.label(),
                    vec![
                        line("Id", a.id.to_string()),
                        line("Name", a.name.clone()),
                        line("Gender", a.gender.clone()),
                        line("Age", a.age.to_string()),
                        line("Age Group", a.age_group.clone()),
                        line("Club", a.club.name.clone()),
                        line("Disciplines", a.discipline_names()),
                        line("Image", a.image_url.clone()),
                    ],
                )
            }),
            Collection::Results => self.data.results.find(id).map(|r| {
                (
                    r.label(),
                    vec![
                        line("Id", r.id.to_string()),
                        line("Track Meet", r.track_meet.name.clone()),
                        line("Date", r.date.format("%Y-%m-%d").to_string()),
                        line("Athlete", r.athlete.name.clone()),
                        line("Discipline", r.discipline.name.clone()),
                        line("Result Type", r.result_type().to_string()),
                        line("Result", r.measurement.to_string()),
                    ],
                )
            }),
            Collection::Items => self.data.items.find(id).map(|i| {
                (
                    i.label(),
                    vec![line("Id", i.id.to_string()), line("Name", i.name.clone())],
                )
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.modal, self.page) {
            (Some(_), _) => "close: dismiss modal  quit: exit".to_string(),
            (None, Page::Info) => "athletes | results | items: navigate  refresh  quit".to_string(),
            (None, Page::Athletes) => {
                "sort <key>  view: cards/table  show|edit|delete <id>  new  refresh  quit".to_string()
            }
            (None, Page::Results) => {
                "search|discipline|gender [value]  sort <key>  show|edit|delete <id>  new  quit".to_string()
            }
            (None, Page::Items) => "sort <key>  show|edit|delete <id>  new  refresh  quit".to_string(),
        };
        FooterInfo { keybindings }
    }
}

fn target_id(modal: &Modal) -> String {
    modal.target.map(|id| id.to_string()).unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Sizes columns to their content, shrinking evenly when the table is wider
/// than the terminal.
fn layout_table(
    columns: &[(&'static str, &'static str)],
    rows: Vec<TableRow>,
    class_for: impl Fn(&str) -> &'static str,
    cols: usize,
) -> TableView {
    let natural: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, (key, label))| {
            let content = rows
                .iter()
                .filter_map(|row| row.cells.get(index))
                .map(|cell| width(&cell.text))
                .max()
                .unwrap_or(0);
            content.max(width(label) + 2).max(width(key) + 2) + 2
        })
        .collect();

    let total: usize = natural.iter().sum();
    let share = (cols / columns.len().max(1)).max(MIN_COLUMN_WIDTH);

    let headers = columns
        .iter()
        .zip(natural)
        .map(|(&(key, label), natural)| ColumnHeader {
            key,
            label,
            class_token: class_for(key),
            width: if total > cols { natural.min(share) } else { natural },
        })
        .collect();

    TableView { columns: headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Club, Discipline, DisciplineGender, Measurement, ResultKind, TrackMeet};
    use chrono::NaiveDate;

    fn athlete(id: i64, name: &str, gender: &str) -> Athlete {
        Athlete {
            id,
            name: name.to_string(),
            gender: gender.to_string(),
            age: 20 + u32::try_from(id).unwrap_or(0),
            image_url: String::new(),
            age_group: "SENIOR".to_string(),
            club: Club {
                id: 1,
                name: "Oslo IL".to_string(),
                city: "Oslo".to_string(),
            },
            disciplines: Vec::new(),
        }
    }

    fn result(id: i64, athlete: Athlete, discipline: &str) -> ResultEntry {
        ResultEntry {
            id,
            track_meet: TrackMeet {
                id: 1,
                name: "Spring Open".to_string(),
            },
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            athlete,
            discipline: Discipline {
                id: 1,
                name: discipline.to_string(),
                gender: DisciplineGender::Female,
                result_type: ResultKind::Time,
            },
            measurement: Measurement::Time("00:00:11.92".to_string()),
        }
    }

    fn state() -> AppState {
        let ann = athlete(1, "Ann Holm", "F");
        let bo = athlete(2, "Bo Lind", "M");
        let data = SharedData {
            athletes: EntityStore::with_items(vec![ann.clone(), bo.clone()]),
            results: EntityStore::with_items(vec![result(10, ann, "100m"), result(11, bo, "Long Jump")]),
            ..SharedData::default()
        };
        AppState::with_data(data, Theme::default())
    }

    #[test]
    fn filtered_results_start_as_full_collection() {
        let state = state();
        assert_eq!(state.filtered_results.len(), 2);
    }

    #[test]
    fn results_table_marks_search_matches() {
        let mut state = state();
        state.page = Page::Results;
        state.result_filter.set_search("holm");
        state.apply_result_filter();

        let Body::Table(table) = state.compute_viewmodel(120).body else {
            panic!("expected a table");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[2].highlight, Some((4, 8)));
        assert_eq!(table.rows[0].cells[3].highlight, None);
    }

    #[test]
    fn search_bar_echoes_query_as_typed() {
        let mut state = state();
        state.page = Page::Results;
        state.result_filter.set_search("HoLm");
        state.apply_result_filter();

        let viewmodel = state.compute_viewmodel(120);
        assert_eq!(viewmodel.search_bar.map(|bar| bar.query), Some("HoLm".to_string()));
        let Body::Table(table) = viewmodel.body else {
            panic!("expected a table");
        };
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn filter_excluding_everything_shows_empty_state() {
        let mut state = state();
        state.page = Page::Results;
        state.result_filter.set_gender("X");
        state.apply_result_filter();

        assert!(matches!(state.compute_viewmodel(80).body, Body::Empty(_)));
    }

    #[test]
    fn sorted_column_carries_class_token() {
        let mut state = state();
        state.page = Page::Items;
        state.data.items = EntityStore::with_items(vec![Item {
            id: 1,
            name: "Baton".to_string(),
        }]);
        state.item_sort.request_sort(ItemSortKey::Name);
        state.item_sort.request_sort(ItemSortKey::Name);

        let Body::Table(table) = state.compute_viewmodel(80).body else {
            panic!("expected a table");
        };
        assert_eq!(table.columns[0].class_token, "");
        assert_eq!(table.columns[1].class_token, "sorted-desc");
    }

    #[test]
    fn details_modal_joins_disciplines() {
        let mut state = state();
        let discipline = |id: i64, name: &str| Discipline {
            id,
            name: name.to_string(),
            gender: DisciplineGender::Female,
            result_type: ResultKind::Time,
        };
        let mut ann = athlete(1, "Ann Holm", "F");
        ann.disciplines = vec![discipline(1, "100m"), discipline(2, "200m")];
        state.data.athletes = EntityStore::with_items(vec![ann]);
        state.modal = Some(Modal::details(Collection::Athletes, 1));

        let modal = state.compute_viewmodel(80).modal.unwrap();
        assert!(modal
            .lines
            .contains(&("Disciplines".to_string(), "100m, 200m".to_string())));
    }

    #[test]
    fn narrow_terminal_shrinks_columns() {
        let mut state = state();
        state.page = Page::Results;
        let Body::Table(table) = state.compute_viewmodel(30).body else {
            panic!("expected a table");
        };
        assert!(table.columns.iter().all(|c| c.width <= MIN_COLUMN_WIDTH));
    }
}
