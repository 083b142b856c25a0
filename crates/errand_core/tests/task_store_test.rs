//! Task store integration tests against an in-memory database

use std::collections::HashSet;
use std::sync::Arc;

use errand_core::db::client;
use errand_core::db::ops::TaskStoreExt;
use errand_core::{StoreError, UserIdentity, ValidationError, project};

#[tokio::test]
async fn created_tasks_appear_in_the_owners_collection() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let owner = UserIdentity::from("U1");

    let record = db.create_task(&owner, "buy milk").await.unwrap();
    assert_eq!(record.content, "buy milk");
    assert_eq!(record.owner, owner);

    let tasks = db.list_tasks(&owner).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].content, "buy milk");
    assert_eq!(tasks[0].id, record.id);

    let items = project(&tasks, None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "buy milk");
}

#[tokio::test]
async fn listing_preserves_creation_order() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let owner = UserIdentity::from("user-order");

    for content in ["first", "second", "third"] {
        db.create_task(&owner, content).await.unwrap();
    }

    let tasks = db.list_tasks(&owner).await.unwrap();
    let contents: Vec<&str> = tasks.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);

    // Projection over the listing is stable across calls
    let once = project(&db.list_tasks(&owner).await.unwrap(), None);
    let twice = project(&db.list_tasks(&owner).await.unwrap(), None);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn empty_and_whitespace_content_is_rejected() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let owner = UserIdentity::from("user-validation");

    for raw in ["", "   "] {
        let err = db.create_task(&owner, raw).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidContent(ValidationError::EmptyContent)
        ));
    }

    // No record was persisted by either attempt
    let tasks = db.list_tasks(&owner).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn owners_never_see_each_others_tasks() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let alice = UserIdentity::from("alice");
    let bob = UserIdentity::from("bob");

    db.create_task(&alice, "alice's errand").await.unwrap();
    db.create_task(&bob, "bob's errand").await.unwrap();
    db.create_task(&bob, "bob's other errand").await.unwrap();

    let alice_tasks = db.list_tasks(&alice).await.unwrap();
    assert_eq!(alice_tasks.len(), 1);
    assert!(alice_tasks.iter().all(|t| t.owner == alice));

    let bob_tasks = db.list_tasks(&bob).await.unwrap();
    assert_eq!(bob_tasks.len(), 2);
    assert!(bob_tasks.iter().all(|t| t.owner == bob));
}

#[tokio::test]
async fn unknown_owner_lists_as_empty_not_error() {
    let db = Arc::new(client::create_test_db().await.unwrap());

    let tasks = db
        .list_tasks(&UserIdentity::from("nobody"))
        .await
        .unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_all_persist_with_distinct_ids() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let owner = UserIdentity::from("user-concurrent");

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let db = db.clone();
            let owner = owner.clone();
            tokio::spawn(async move { db.create_task(&owner, &format!("task number {}", i)).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for result in futures::future::join_all(handles).await {
        let record = result.unwrap().unwrap();
        assert!(ids.insert(record.id), "duplicate task id");
    }

    let tasks = db.list_tasks(&owner).await.unwrap();
    assert_eq!(tasks.len(), 10);
}

#[tokio::test]
async fn sequential_writes_are_observed_by_subsequent_reads() {
    let db = Arc::new(client::create_test_db().await.unwrap());
    let owner = UserIdentity::from("user-rw");

    let first = db.create_task(&owner, "first").await.unwrap();
    assert_eq!(db.list_tasks(&owner).await.unwrap().len(), 1);

    let second = db.create_task(&owner, "second").await.unwrap();
    let tasks = db.list_tasks(&owner).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, first.id);
    assert_eq!(tasks[1].id, second.id);
}
