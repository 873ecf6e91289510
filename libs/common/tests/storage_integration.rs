//! Integration tests for the storage backends
//!
//! These tests verify that both backends honour the same slot contract the
//! session model relies on.

use common::storage::{AUTH_TOKEN_KEY, FileStorage, MemoryStorage, Storage, USER_DATA_KEY};

fn exercise_slots(storage: &dyn Storage) -> Result<(), Box<dyn std::error::Error>> {
    let user_json = r#"{"fullName":"Ada Lovelace","email":"ada@example.com"}"#;

    storage.set(AUTH_TOKEN_KEY, "integration-token")?;
    storage.set(USER_DATA_KEY, user_json)?;

    assert_eq!(
        storage.get(AUTH_TOKEN_KEY)?,
        Some("integration-token".to_string()),
        "token slot round trip failed"
    );
    assert_eq!(
        storage.get(USER_DATA_KEY)?,
        Some(user_json.to_string()),
        "user slot round trip failed"
    );

    // Slots are independent
    storage.remove(AUTH_TOKEN_KEY)?;
    assert_eq!(storage.get(AUTH_TOKEN_KEY)?, None);
    assert!(storage.get(USER_DATA_KEY)?.is_some());

    storage.remove(USER_DATA_KEY)?;
    assert_eq!(storage.get(USER_DATA_KEY)?, None);

    Ok(())
}

#[test]
fn test_memory_storage_slots() -> Result<(), Box<dyn std::error::Error>> {
    exercise_slots(&MemoryStorage::new())
}

#[test]
fn test_file_storage_slots() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    exercise_slots(&FileStorage::new(dir.path()))
}

#[test]
fn test_file_storage_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    FileStorage::new(dir.path()).set(AUTH_TOKEN_KEY, "persisted")?;

    let reopened = FileStorage::new(dir.path());
    assert_eq!(reopened.get(AUTH_TOKEN_KEY)?, Some("persisted".to_string()));
    Ok(())
}
