//! Integration tests for `DieselItemRepository` against a temporary SQLite
//! database.
//!
//! These tests validate the repository contract end to end: store-assigned
//! identifiers, whole-record replacement, and deletion reporting.

use backend::domain::ports::ItemRepository;
use backend::domain::{ItemDraft, ItemId, ItemName};
use backend::outbound::persistence::DieselItemRepository;

mod support;

use support::{TempStore, build_pool, migrated_store};

fn draft(name: &str, description: Option<&str>) -> ItemDraft {
    ItemDraft::new(
        ItemName::new(name).expect("valid name"),
        description.map(ToOwned::to_owned),
    )
}

async fn repository_for(store: &TempStore) -> DieselItemRepository {
    DieselItemRepository::new(build_pool(&store.database_url).await)
}

#[tokio::test]
async fn insert_assigns_fresh_identifiers() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let first = repository
        .insert(&draft("First", None))
        .await
        .expect("insert first");
    let second = repository
        .insert(&draft("Second", None))
        .await
        .expect("insert second");

    assert_eq!(first.id(), ItemId::new(1));
    assert_eq!(second.id(), ItemId::new(2));
}

#[tokio::test]
async fn get_by_id_round_trips_inserted_values() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let created = repository
        .insert(&draft("Widget", Some("spare part")))
        .await
        .expect("insert item");

    let fetched = repository
        .get_by_id(created.id())
        .await
        .expect("fetch item")
        .expect("item exists");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_by_id_returns_none_for_missing_rows() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let fetched = repository
        .get_by_id(ItemId::new(1234))
        .await
        .expect("query missing id");

    assert!(fetched.is_none());
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let created = repository
        .insert(&draft("Widget", Some("spare part")))
        .await
        .expect("insert item");

    // The replacement carries no description, so the column must be cleared.
    let updated = repository
        .update(created.id(), &draft("Gadget", None))
        .await
        .expect("update item")
        .expect("row exists");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name().as_ref(), "Gadget");
    assert_eq!(updated.description(), None);

    let fetched = repository
        .get_by_id(created.id())
        .await
        .expect("fetch item")
        .expect("item exists");
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_returns_none_for_missing_rows() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let updated = repository
        .update(ItemId::new(42), &draft("Gadget", None))
        .await
        .expect("update missing id");

    assert!(updated.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    let created = repository
        .insert(&draft("Widget", None))
        .await
        .expect("insert item");

    assert!(
        repository
            .delete_by_id(created.id())
            .await
            .expect("first delete")
    );
    assert!(
        !repository
            .delete_by_id(created.id())
            .await
            .expect("second delete")
    );
    assert!(
        repository
            .get_by_id(created.id())
            .await
            .expect("fetch deleted id")
            .is_none()
    );
}

#[tokio::test]
async fn list_all_returns_every_row() {
    let store = migrated_store();
    let repository = repository_for(&store).await;

    for name in ["One", "Two", "Three"] {
        repository
            .insert(&draft(name, None))
            .await
            .expect("insert item");
    }

    let items = repository.list_all().await.expect("list items");

    assert_eq!(items.len(), 3);
    let names: Vec<&str> = items.iter().map(|item| item.name().as_ref()).collect();
    for name in ["One", "Two", "Three"] {
        assert!(names.contains(&name), "missing item '{name}'");
    }
}
