#[path = "common/mod.rs"]
mod common;

use common::{athlete, club, ids, items};
use trackside::domain::{Athlete, Club, Item};
use trackside::engine::{AthleteSortKey, ItemSortKey, SortDirection, Sorter};

fn athletes() -> Vec<Athlete> {
    vec![
        athlete(1, "Ann Holm", "F", 24, club(1, "Zeta")),
        athlete(2, "Bo Lind", "M", 19, club(2, "Alpha")),
        athlete(3, "Carla Berg", "F", 31, club(3, "Midway")),
        athlete(4, "Dan Skov", "M", 15, Club::placeholder()),
    ]
}

// ============================================================================
// Ordering properties
// ============================================================================

#[test]
fn descending_is_exact_reverse_without_duplicates() {
    let source = athletes();
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();

    sorter.request_sort(AthleteSortKey::Age);
    let ascending = sorter.sorted(&source);
    sorter.request_sort(AthleteSortKey::Age);
    let mut descending = sorter.sorted(&source);
    descending.reverse();

    assert_eq!(ascending, descending);
}

#[test]
fn sorting_is_idempotent() {
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort(AthleteSortKey::Name);

    let once = sorter.sorted(&athletes());
    let twice = sorter.sorted(&once);

    assert_eq!(once, twice);
}

#[test]
fn sorting_keeps_every_element_and_leaves_source_untouched() {
    let source = athletes();
    let snapshot = source.clone();
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort(AthleteSortKey::Gender);

    let sorted = sorter.sorted(&source);

    assert_eq!(source, snapshot);
    assert_eq!(sorted.len(), source.len());
    let mut sorted_ids = ids(&sorted, |a| a.id);
    sorted_ids.sort_unstable();
    assert_eq!(sorted_ids, vec![1, 2, 3, 4]);
}

#[test]
fn no_directive_returns_input_order() {
    let sorter = Sorter::<Item, ItemSortKey>::new();
    let source = items(&["c", "a", "b"]);
    assert_eq!(sorter.sorted(&source), source);
}

// ============================================================================
// Keys and toggling
// ============================================================================

#[test]
fn club_name_sort_puts_alpha_first() {
    let source = vec![
        athlete(1, "Zed", "M", 20, club(1, "Zeta")),
        athlete(2, "Al", "M", 20, club(2, "Alpha")),
    ];
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    assert_eq!(sorter.request_sort_named("club.name"), Some(SortDirection::Ascending));

    assert_eq!(ids(&sorter.sorted(&source), |a| a.id), vec![2, 1]);
}

#[test]
fn athlete_without_club_orders_first_ascending() {
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort(AthleteSortKey::ClubName);
    assert_eq!(ids(&sorter.sorted(&athletes()), |a| a.id), vec![4, 2, 3, 1]);

    sorter.request_sort(AthleteSortKey::ClubName);
    assert_eq!(ids(&sorter.sorted(&athletes()), |a| a.id), vec![1, 3, 2, 4]);
}

#[test]
fn second_request_on_same_key_descends() {
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort_named("age");
    assert_eq!(sorter.request_sort_named("age"), Some(SortDirection::Descending));
    assert_eq!(sorter.class_for_name("age"), "sorted-desc");
    assert_eq!(sorter.class_for_name("name"), "");
}

#[test]
fn switching_keys_resets_to_ascending() {
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort(AthleteSortKey::Age);
    sorter.request_sort(AthleteSortKey::Age);

    assert_eq!(sorter.request_sort(AthleteSortKey::Name), SortDirection::Ascending);
    assert_eq!(sorter.class_for(AthleteSortKey::Name), "sorted-asc");
    assert_eq!(sorter.class_for(AthleteSortKey::Age), "");
}

#[test]
fn unknown_key_keeps_current_order() {
    let mut sorter = Sorter::<Athlete, AthleteSortKey>::new();
    sorter.request_sort(AthleteSortKey::Age);
    let before = sorter.sorted(&athletes());

    assert_eq!(sorter.request_sort_named("club.city"), None);

    assert_eq!(sorter.sorted(&athletes()), before);
    assert_eq!(sorter.class_for_name("club.city"), "");
}
