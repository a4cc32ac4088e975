//! Concurrent property store.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::infrastructure::ports::PropertyStorePort;

/// In-memory property store backed by a concurrent map.
///
/// Safe to share across threads; concurrent writes to the same name are
/// last-write-wins.
#[derive(Debug, Default)]
pub struct InMemoryPropertyStore {
    properties: DashMap<String, String>,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&self, name: &str) -> Option<String> {
        self.properties.remove(name).map(|(_, value)| value)
    }

    /// Sorted copy of every property currently stored.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

impl PropertyStorePort for InMemoryPropertyStore {
    fn set_property(&self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).map(|entry| entry.value().clone())
    }
}

static SYSTEM_PROPERTIES: Lazy<Arc<InMemoryPropertyStore>> =
    Lazy::new(|| Arc::new(InMemoryPropertyStore::new()));

/// The process-wide property store.
///
/// Every call returns a handle to the same store, so values published by one
/// part of the process are visible to all others.
pub fn system_properties() -> Arc<InMemoryPropertyStore> {
    Arc::clone(&SYSTEM_PROPERTIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn set_overwrites_previous_value() {
        let store = InMemoryPropertyStore::new();

        store.set_property("db.password", "first");
        store.set_property("db.password", "second");

        assert_eq!(store.get_property("db.password").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_property_is_none() {
        let store = InMemoryPropertyStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get_property("missing"), None);
    }

    #[test]
    fn remove_returns_previous_value() {
        let store = InMemoryPropertyStore::new();
        store.set_property("key", "value");

        assert_eq!(store.remove("key").as_deref(), Some("value"));
        assert_eq!(store.remove("key"), None);
    }

    #[test]
    fn snapshot_is_sorted_by_name() {
        let store = InMemoryPropertyStore::new();
        store.set_property("b", "2");
        store.set_property("a", "1");

        let names: Vec<_> = store.snapshot().into_keys().collect();

        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn system_properties_is_shared_across_threads() {
        let name = "envfile.test.system_properties_is_shared_across_threads";

        thread::spawn(move || system_properties().set_property(name, "from thread"))
            .join()
            .unwrap();

        assert_eq!(
            system_properties().get_property(name).as_deref(),
            Some("from thread")
        );
        system_properties().remove(name);
    }
}
