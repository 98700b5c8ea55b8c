//! Contract tests for the in-memory mapping store: create-if-absent
//! semantics, single-winner atomicity, and TTL expiry.

use std::sync::Arc;
use std::time::Duration;

use shortlink::store::{MappingStore, MemoryStore};

#[tokio::test]
async fn test_try_create_then_lookup_returns_value() {
    let store = MemoryStore::new();

    let created = store
        .try_create("abc123", "https://example.com/page", None)
        .await
        .unwrap();
    assert!(created);

    let value = store.lookup("abc123").await.unwrap();
    assert_eq!(value.as_deref(), Some("https://example.com/page"));
}

#[tokio::test]
async fn test_try_create_existing_key_returns_false_and_preserves_value() {
    let store = MemoryStore::new();

    assert!(
        store
            .try_create("abc123", "https://example.com/first", None)
            .await
            .unwrap()
    );
    assert!(
        !store
            .try_create("abc123", "https://example.com/second", None)
            .await
            .unwrap()
    );

    let value = store.lookup("abc123").await.unwrap();
    assert_eq!(value.as_deref(), Some("https://example.com/first"));
}

#[tokio::test]
async fn test_lookup_missing_key() {
    let store = MemoryStore::new();
    assert!(store.lookup("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_try_create_has_single_winner() {
    let store = Arc::new(MemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .try_create("contested", &format!("https://example.com/{i}"), None)
                .await
                .unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_ttl_expiry() {
    let store = MemoryStore::new();

    store
        .try_create(
            "shortlived",
            "https://example.com",
            Some(Duration::from_millis(50)),
        )
        .await
        .unwrap();

    assert!(store.lookup("shortlived").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(store.lookup("shortlived").await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_key_can_be_recreated() {
    let store = MemoryStore::new();

    store
        .try_create(
            "reusable",
            "https://example.com/old",
            Some(Duration::from_millis(30)),
        )
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;

    let created = store
        .try_create("reusable", "https://example.com/new", None)
        .await
        .unwrap();
    assert!(created);

    let value = store.lookup("reusable").await.unwrap();
    assert_eq!(value.as_deref(), Some("https://example.com/new"));
}

#[tokio::test]
async fn test_ping() {
    let store = MemoryStore::new();
    assert!(store.ping().await.is_ok());
}
