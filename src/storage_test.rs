use super::*;

#[test]
fn memory_store_round_trips_a_value() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme").unwrap(), None);
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn with_entry_seeds_the_store() {
    let store = MemoryStore::new().with_entry("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn unavailable_store_fails_every_operation() {
    let store = MemoryStore::unavailable();
    assert!(matches!(store.load("theme"), Err(PageError::Storage(_))));
    assert!(matches!(store.save("theme", "dark"), Err(PageError::Storage(_))));
    assert_eq!(store.get("theme"), None);
}
