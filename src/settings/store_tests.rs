//! Tests for SettingsStore

use super::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_store_new() {
    let store = SettingsStore::new("/tmp/reply-scout-settings.json");
    assert!(!store.is_in_memory());
    assert_eq!(
        store.path().to_str().unwrap(),
        "/tmp/reply-scout-settings.json"
    );
}

#[test]
fn test_store_in_memory() {
    let store = SettingsStore::in_memory();
    assert!(store.is_in_memory());
}

#[tokio::test]
async fn test_defaults() {
    let store = SettingsStore::in_memory();
    let settings = store.settings().await;

    assert_eq!(settings.page_size, 100);
    assert_eq!(settings.endpoint.origin, DEFAULT_ORIGIN);
    assert!(!settings.endpoint.is_configured());
    assert!(settings.timeout().is_none());
    assert!(settings.last_subject_id.is_none());
}

#[tokio::test]
async fn test_from_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::from_file(dir.path().join("absent.json"))
        .await
        .unwrap();
    assert!(!store.is_in_memory());
    assert_eq!(store.settings().await, Settings::default());
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_endpoint_normalized() {
    let endpoint = EndpointSettings {
        host: " https://api.example.com// ".to_string(),
        path: " v1/replies ".to_string(),
        origin: "http://localhost:3000/".to_string(),
    }
    .normalized();

    assert_eq!(endpoint.host, "https://api.example.com");
    assert_eq!(endpoint.path, "/v1/replies");
    assert_eq!(endpoint.origin, "http://localhost:3000");
}

#[test]
fn test_empty_path_stays_unconfigured() {
    let endpoint = EndpointSettings::new("   ").normalized();
    assert_eq!(endpoint.path, "");
    assert!(!endpoint.is_configured());
}

#[test]
fn test_validate_rejects_zero_page_size() {
    let settings = Settings {
        page_size: 0,
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let store = SettingsStore::new(&path);
    store
        .set_endpoint(EndpointSettings::new("sdap4mysql/replies"))
        .await
        .unwrap();
    store.remember_subject("12345").await.unwrap();

    let reloaded = SettingsStore::from_file(&path).await.unwrap();
    let settings = reloaded.settings().await;
    assert_eq!(settings.endpoint.path, "/sdap4mysql/replies");
    assert_eq!(settings.last_subject_id.as_deref(), Some("12345"));

    // No temp file left behind
    assert!(!path.with_extension("tmp").exists());
}

#[tokio::test]
async fn test_load_into_existing_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    tokio::fs::write(
        &path,
        r#"{"endpoint": {"path": "/api/replies"}, "page_size": 50}"#,
    )
    .await
    .unwrap();

    let store = SettingsStore::new(&path);
    store.load().await.unwrap();

    let settings = store.settings().await;
    assert_eq!(settings.endpoint.path, "/api/replies");
    assert_eq!(settings.endpoint.origin, DEFAULT_ORIGIN);
    assert_eq!(settings.page_size, 50);
}

#[tokio::test]
async fn test_update_validates() {
    let store = SettingsStore::in_memory();

    let result = store.update(|s| s.page_size = 0).await;
    assert!(result.is_err());
    assert_eq!(store.settings().await.page_size, 100);

    store
        .update(|s| {
            s.page_size = 50;
            s.endpoint.path = "replies".to_string();
        })
        .await
        .unwrap();
    let settings = store.settings().await;
    assert_eq!(settings.page_size, 50);
    assert_eq!(settings.endpoint.path, "/replies");
}

#[tokio::test]
async fn test_clone_shares_settings() {
    let store = SettingsStore::in_memory();
    let cloned = store.clone();

    store.remember_subject("777").await.unwrap();
    assert_eq!(cloned.last_subject_id().await.as_deref(), Some("777"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_load_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("invalid.json");

    tokio::fs::write(&path, "{ invalid json }").await.unwrap();

    let store = SettingsStore::new(&path);
    assert!(store.load().await.is_err());
    assert!(SettingsStore::from_file(&path).await.is_err());
}
