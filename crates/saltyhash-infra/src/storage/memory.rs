//! In-process key-value store.
//!
//! Implements `KvStore` on a `DashMap`. Nothing is persisted; useful for
//! embedding the engine in a short-lived process and for tests.

use dashmap::DashMap;
use saltyhash_core::storage::kv_store::{KvStore, child_keys};
use saltyhash_types::error::RepositoryError;

/// `DashMap`-backed implementation of `KvStore`.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), RepositoryError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, RepositoryError> {
        // Copy keys out first so no shard guard is held while sorting.
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        Ok(child_keys(prefix, keys.iter().map(String::as_str)))
    }
}
