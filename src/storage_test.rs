use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("darkMode").unwrap(), None);
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let mut store = MemoryStore::new();
    store.set("darkMode", "1").unwrap();
    store.set("darkMode", "0").unwrap();
    assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("0"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_keys_are_independent() {
    let mut store = MemoryStore::new().with_entry("other", "keep");
    store.set("darkMode", "1").unwrap();
    assert_eq!(store.value("other"), Some("keep"));
    assert_eq!(store.value("darkMode"), Some("1"));
}

#[test]
fn with_entry_seeds_value() {
    let store = MemoryStore::new().with_entry("darkMode", "1");
    assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("1"));
}

#[test]
fn boxed_store_delegates() {
    let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
    store.set("darkMode", "1").unwrap();
    assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("1"));
}
