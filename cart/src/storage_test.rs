use super::*;

#[test]
fn memory_storage_reads_absent_key_as_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("cart"), Ok(None));
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_write_then_read() {
    let storage = MemoryStorage::new();
    storage.write("cart", "{}").expect("write");
    assert_eq!(storage.read("cart"), Ok(Some("{}".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_write_replaces_previous_value() {
    let storage = MemoryStorage::new();
    storage.write("cart", "one").expect("write");
    storage.write("cart", "two").expect("write");
    assert_eq!(storage.get("cart").as_deref(), Some("two"));
}

#[test]
fn memory_storage_remove_absent_key_succeeds() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("cart"), Ok(()));
}

#[test]
fn memory_storage_clones_share_slots() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    other.write("cart", "shared").expect("write");
    assert_eq!(storage.get("cart").as_deref(), Some("shared"));
    storage.remove("cart").expect("remove");
    assert!(other.is_empty());
}

#[test]
fn storage_is_usable_through_a_reference() {
    let storage = MemoryStorage::new();
    let by_ref = &storage;
    by_ref.write("k", "v").expect("write");
    assert_eq!(CartStorage::read(&by_ref, "k"), Ok(Some("v".to_owned())));
}

#[test]
fn storage_error_messages_are_descriptive() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage is unavailable");
    assert_eq!(StorageError::QuotaExceeded.to_string(), "storage quota exceeded");
    assert!(StorageError::Backend("boom".into()).to_string().contains("boom"));
}

#[test]
fn poisoned_memory_storage_reports_backend_error() {
    let storage = MemoryStorage::new();
    storage.write("cart", "{}").expect("write");

    let shared = storage.clone();
    let joined = std::thread::spawn(move || {
        let _guard = shared.slots.lock().expect("lock");
        panic!("poison the slot map");
    })
    .join();
    assert!(joined.is_err());

    assert!(matches!(storage.read("cart"), Err(StorageError::Backend(_))));
    assert!(matches!(storage.write("cart", "[]"), Err(StorageError::Backend(_))));
    assert_eq!(storage.get("cart"), None);
    assert_eq!(storage.len(), 0);
    assert!(storage.is_empty());
}
