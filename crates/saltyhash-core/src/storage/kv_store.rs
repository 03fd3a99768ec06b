//! Key-value store trait.
//!
//! Defines the interface for the persistent storage medium role records live
//! in. Implementations live in saltyhash-infra.

use saltyhash_types::error::RepositoryError;

/// Trait for flat, byte-valued persistent storage.
///
/// Each call is individually atomic. Uses RPITIT (native async fn in traits,
/// Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn put(
        &self,
        key: &str,
        value: &[u8],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a key. No-op if the key does not exist.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List the direct children of `prefix`, with the prefix stripped, sorted.
    fn list(
        &self,
        prefix: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, RepositoryError>> + Send;
}

/// Reduce full keys to the sorted, de-duplicated direct children of `prefix`.
///
/// Keys outside the prefix, the prefix itself, and keys nested one more `/`
/// deep are dropped.
pub fn child_keys<'a>(prefix: &str, keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut children: Vec<String> = keys
        .into_iter()
        .filter_map(|key| key.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .map(str::to_string)
        .collect();
    children.sort();
    children.dedup();
    children
}
