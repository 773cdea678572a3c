use serde_json::json;
use trackside::domain::{Athlete, AthleteDraft, Item, ResultEntry, UNEXPECTED_ERROR_MESSAGE};
use trackside::gateway::{routes, MemoryGateway, Verb};
use trackside::store::{Catalog, EntityStore, Toasts};

async fn loaded<E: trackside::domain::Entity>(gateway: &MemoryGateway) -> EntityStore<E> {
    let mut store = EntityStore::new();
    let mut toasts = Toasts::new();
    store.list(gateway, &mut toasts).await;
    assert!(toasts.is_empty());
    store
}

// ============================================================================
// Cache consistency
// ============================================================================

#[tokio::test]
async fn list_caches_the_collection() {
    let gateway = MemoryGateway::with_demo_data();
    let store = loaded::<ResultEntry>(&gateway).await;

    assert_eq!(store.len(), 5);
    assert!(!store.is_loading());
    assert_eq!(store.find(3).map(|r| r.measurement.to_string()), Some("7204".to_string()));
}

#[tokio::test]
async fn failed_create_keeps_length_and_notifies_once() {
    let gateway = MemoryGateway::with_demo_data();
    gateway.fail_on(Verb::Post, &routes::create("athletes"), 400);
    let mut store = loaded::<Athlete>(&gateway).await;
    let mut toasts = Toasts::new();

    let draft = AthleteDraft {
        name: Some("Eva Dahl".to_string()),
        ..AthleteDraft::default()
    };
    let created = store.create(&gateway, &draft, &mut toasts).await;

    assert!(created.is_none());
    assert_eq!(store.len(), 4);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.pending()[0].status, Some(400));
    assert_eq!(
        toasts.pending()[0].message,
        "There was an error in your request. Please try again."
    );
}

#[tokio::test]
async fn create_appends_server_version() {
    let gateway = MemoryGateway::with_demo_data();
    let mut store = loaded::<Athlete>(&gateway).await;
    let mut toasts = Toasts::new();

    let draft = AthleteDraft {
        name: Some("Eva Dahl".to_string()),
        gender: Some("F".to_string()),
        age: Some(22),
        ..AthleteDraft::default()
    };
    let created = store.create(&gateway, &draft, &mut toasts).await;

    let created = created.expect("create succeeds");
    assert_eq!(created.id, 5);
    assert_eq!(store.len(), 5);
    assert!(created.club.is_placeholder());
    assert_eq!(store.items().last().map(|a| a.name.as_str()), Some("Eva Dahl"));
}

#[tokio::test]
async fn update_replaces_in_place() {
    let gateway = MemoryGateway::with_demo_data();
    let mut store = loaded::<Athlete>(&gateway).await;
    let mut toasts = Toasts::new();

    let draft = AthleteDraft {
        age: Some(25),
        ..AthleteDraft::default()
    };
    store.update(&gateway, 1, &draft, &mut toasts).await;

    assert_eq!(store.items()[0].id, 1);
    assert_eq!(store.items()[0].age, 25);
    assert_eq!(store.items()[0].name, "Ann Holm");
    assert!(toasts.is_empty());
}

#[tokio::test]
async fn failed_update_keeps_cached_entity() {
    let gateway = MemoryGateway::with_demo_data();
    gateway.fail_on(Verb::Patch, &routes::edit("athletes", 2), 404);
    let mut store = loaded::<Athlete>(&gateway).await;
    let before = store.items().to_vec();
    let mut toasts = Toasts::new();

    let draft = AthleteDraft {
        name: Some("Renamed".to_string()),
        ..AthleteDraft::default()
    };
    assert!(store.update(&gateway, 2, &draft, &mut toasts).await.is_none());

    assert_eq!(store.items(), before.as_slice());
    assert_eq!(toasts.pending()[0].message, "The resource was not found.");
}

#[tokio::test]
async fn delete_drops_only_the_target() {
    let gateway = MemoryGateway::with_demo_data();
    let mut store = loaded::<Item>(&gateway).await;
    let mut toasts = Toasts::new();

    assert!(store.delete(&gateway, 2, &mut toasts).await);

    let ids: Vec<i64> = store.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(gateway.rows("items").len(), 2);
}

#[tokio::test]
async fn failed_list_keeps_previous_cache() {
    let gateway = MemoryGateway::with_demo_data();
    let mut store = loaded::<Item>(&gateway).await;
    gateway.fail_on(Verb::Get, &routes::all("items"), 503);
    let mut toasts = Toasts::new();

    assert!(store.list(&gateway, &mut toasts).await.is_empty());

    assert_eq!(store.len(), 3);
    assert_eq!(
        toasts.pending()[0].message,
        "There was an error on the server. Please try again later."
    );
}

#[tokio::test]
async fn malformed_payload_is_an_unexpected_error() {
    let gateway = MemoryGateway::new();
    gateway.seed("items", vec![json!({"id": "one", "name": 7})]);
    let mut store = EntityStore::<Item>::new();
    let mut toasts = Toasts::new();

    store.list(&gateway, &mut toasts).await;

    assert!(store.is_empty());
    assert_eq!(toasts.pending()[0].message, UNEXPECTED_ERROR_MESSAGE);
    assert_eq!(toasts.pending()[0].status, None);
}

#[tokio::test]
async fn null_optional_fields_do_not_drop_the_collection() {
    let gateway = MemoryGateway::new();
    gateway.seed(
        "athletes",
        vec![
            json!({"id": 1, "name": "Ann Holm", "gender": "F", "age": 24, "imageUrl": "https://example.org/ann.png",
                   "athleteAgeGroupEnum": "SENIOR", "club": {"id": 1, "name": "Aarhus 1900", "city": "Aarhus"}}),
            json!({"id": 2, "name": "Bo Lind", "gender": "M", "age": 19, "imageUrl": null,
                   "athleteAgeGroupEnum": null, "club": {"id": 2, "name": "Sparta", "city": null}}),
        ],
    );
    let mut store = EntityStore::<Athlete>::new();
    let mut toasts = Toasts::new();

    store.list(&gateway, &mut toasts).await;

    assert!(toasts.is_empty());
    assert_eq!(store.len(), 2);
    assert_eq!(store.find(2).map(|a| a.image_url.as_str()), Some(""));
    assert_eq!(store.find(2).map(|a| a.club.city.as_str()), Some(""));
}

#[tokio::test]
async fn results_embedding_sparse_athletes_are_cached() {
    let gateway = MemoryGateway::with_demo_data();
    let store = loaded::<ResultEntry>(&gateway).await;

    let dan = store.find(5).map(|r| r.athlete.clone()).expect("result 5 cached");
    assert_eq!(dan.name, "Dan Skov");
    assert_eq!(dan.image_url, "");
    assert!(dan.club.is_placeholder());
}

#[tokio::test]
async fn catalog_tolerates_null_club_city() {
    let gateway = MemoryGateway::with_demo_data();
    gateway.seed("clubs", vec![json!({"id": 7, "name": "Hermes", "city": null}), json!({"id": 8, "name": "Viking"})]);

    let catalog = Catalog::load(&gateway).await.expect("catalog loads");

    assert_eq!(catalog.clubs.len(), 2);
    assert!(catalog.clubs.iter().all(|c| c.city.is_empty()));
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn catalog_loads_reference_collections() {
    let gateway = MemoryGateway::with_demo_data();
    let catalog = Catalog::load(&gateway).await.expect("catalog loads");

    assert_eq!(catalog.clubs.len(), 2);
    assert_eq!(catalog.track_meets.len(), 2);
    assert_eq!(catalog.discipline_names(), vec!["100m", "Long Jump", "Decathlon"]);
    assert_eq!(catalog.club(2).map(|c| c.name.as_str()), Some("Sparta Athletics"));
}

#[tokio::test]
async fn catalog_failure_propagates() {
    let gateway = MemoryGateway::with_demo_data();
    gateway.fail_on(Verb::Get, &routes::all("trackmeets"), 401);

    let err = Catalog::load(&gateway).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
}
