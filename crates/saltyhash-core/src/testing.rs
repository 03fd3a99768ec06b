//! Test doubles for the `KvStore` port.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use saltyhash_types::error::RepositoryError;

use crate::storage::kv_store::{KvStore, child_keys};

/// In-process store that counts `get` calls.
#[derive(Default)]
pub struct MockKvStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    gets: AtomicUsize,
}

impl MockKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(self, key: &str, value: &[u8]) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        self
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

impl KvStore for MockKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), RepositoryError> {
        // Yield so concurrent upserts interleave unless something serializes them.
        tokio::task::yield_now().await;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        Ok(child_keys(prefix, entries.keys().map(String::as_str)))
    }
}

/// Store whose every operation fails.
pub struct FailingKvStore;

impl KvStore for FailingKvStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
        Err(RepositoryError::Connection("store offline".to_string()))
    }

    async fn put(&self, _key: &str, _value: &[u8]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Connection("store offline".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::Connection("store offline".to_string()))
    }

    async fn list(&self, _prefix: &str) -> Result<Vec<String>, RepositoryError> {
        Err(RepositoryError::Connection("store offline".to_string()))
    }
}
