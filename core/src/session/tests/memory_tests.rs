//! Unit tests for the in-memory session store

use crate::domain::entities::session::Session;
use crate::session::{InMemorySessionStore, SessionStore};

#[tokio::test]
async fn test_empty_store() {
    let store = InMemorySessionStore::new();

    assert_eq!(store.access_token().await, None);
    assert_eq!(store.refresh_token().await, None);
    assert_eq!(store.email().await, None);
    assert!(!store.session().await.is_authenticated());
}

#[tokio::test]
async fn test_save_and_read_tokens() {
    let store = InMemorySessionStore::new();

    store
        .save_tokens("access-1", Some("refresh-1"), Some("a@b.com"))
        .await
        .unwrap();

    assert_eq!(store.access_token().await.as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().await.as_deref(), Some("refresh-1"));
    assert_eq!(store.email().await.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn test_refresh_keeps_existing_refresh_token_and_email() {
    let store = InMemorySessionStore::new();
    store
        .save_tokens("access-1", Some("refresh-1"), Some("a@b.com"))
        .await
        .unwrap();

    store.save_tokens("access-2", None, None).await.unwrap();

    let session = store.session().await;
    assert_eq!(session.access_token.as_deref(), Some("access-2"));
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(session.email.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn test_clear_tokens() {
    let store = InMemorySessionStore::with_session(Session::new(
        "access-1",
        Some("refresh-1".to_string()),
        Some("a@b.com".to_string()),
    ));

    store.clear_tokens().await.unwrap();

    assert_eq!(store.session().await, Session::default());
}

#[tokio::test]
async fn test_blank_token_reads_as_absent() {
    let store = InMemorySessionStore::with_session(Session {
        access_token: Some("  ".to_string()),
        refresh_token: Some(String::new()),
        email: None,
    });

    assert_eq!(store.access_token().await, None);
    assert_eq!(store.refresh_token().await, None);
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = InMemorySessionStore::new();
    let other = store.clone();

    store.save_tokens("shared", None, None).await.unwrap();

    assert_eq!(other.access_token().await.as_deref(), Some("shared"));
}
