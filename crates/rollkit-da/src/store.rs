//! Key-value store handle given to DA clients on initialization.

use std::collections::HashMap;
use std::sync::RwLock;

/// A minimal key-value store. DA clients may use it to persist their own bookkeeping.
pub trait Datastore: Send + Sync {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn put(&self, key: &[u8], value: Vec<u8>);

    fn delete(&self, key: &[u8]);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

/// A [`Datastore`] that keeps everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryDatastore {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Datastore for InMemoryDatastore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: &[u8], value: Vec<u8>) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_vec(), value);
    }

    fn delete(&self, key: &[u8]) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_delete() {
        let store = InMemoryDatastore::new();
        assert!(!store.has(b"height"));

        store.put(b"height", vec![1]);
        store.put(b"height", vec![2]);
        assert_eq!(store.get(b"height"), Some(vec![2]));

        store.delete(b"height");
        assert_eq!(store.get(b"height"), None);
    }
}
