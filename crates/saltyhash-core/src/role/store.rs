//! Role store: CRUD over role records under the sharded lock table.
//!
//! Records are JSON-encoded [`RoleEntry`] values stored at
//! `roles/<name>`. Reads take the shard's shared lock; upsert and delete take
//! its exclusive lock, so the read-merge-write of a partial update cannot lose
//! a concurrent write to the same role.

use saltyhash_types::error::RepositoryError;
use saltyhash_types::role::{ROLE_KEY_PREFIX, RoleEntry, RoleName, RoleUpdate};

use crate::role::locks::ShardedLocks;
use crate::storage::kv_store::KvStore;

/// Role records on top of a [`KvStore`].
///
/// Owns its lock table; build one per process and share it (e.g. behind an
/// `Arc`) between the services that need it.
pub struct RoleStore<S: KvStore> {
    store: S,
    locks: ShardedLocks,
}

impl<S: KvStore> RoleStore<S> {
    /// Create a role store with `shard_count` lock shards (rounded up to a power of two).
    pub fn new(store: S, shard_count: usize) -> Self {
        Self {
            store,
            locks: ShardedLocks::new(shard_count),
        }
    }

    pub fn locks(&self) -> &ShardedLocks {
        &self.locks
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Read a role under its shard's shared lock.
    ///
    /// Returns `Ok(None)` when no record exists and `RepositoryError::Decode`
    /// when the stored bytes are not a role record.
    pub async fn get(&self, name: &RoleName) -> Result<Option<RoleEntry>, RepositoryError> {
        let _guard = self.locks.read(name.as_str()).await;
        self.read_entry(name).await
    }

    /// Write a role, merging unspecified fields from the existing record.
    ///
    /// Returns the record as written.
    pub async fn upsert(
        &self,
        name: &RoleName,
        update: RoleUpdate,
    ) -> Result<RoleEntry, RepositoryError> {
        let _guard = self.locks.write(name.as_str()).await;

        let existing = if update.salt.is_some() && update.mode.is_some() {
            None
        } else {
            self.read_entry(name).await?
        };
        let entry = update.apply(existing);

        let bytes = serde_json::to_vec(&entry)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize role: {e}")))?;
        self.store.put(&name.storage_key(), &bytes).await?;

        tracing::debug!(role = %name, mode = %entry.salt_mode(), "role written");
        Ok(entry)
    }

    /// Remove a role. Deleting a missing role is not an error.
    pub async fn delete(&self, name: &RoleName) -> Result<(), RepositoryError> {
        let _guard = self.locks.write(name.as_str()).await;
        self.store.delete(&name.storage_key()).await?;
        tracing::debug!(role = %name, "role deleted");
        Ok(())
    }

    /// All stored role names, sorted.
    pub async fn list(&self) -> Result<Vec<String>, RepositoryError> {
        self.store.list(ROLE_KEY_PREFIX).await
    }

    async fn read_entry(&self, name: &RoleName) -> Result<Option<RoleEntry>, RepositoryError> {
        let key = name.storage_key();
        let Some(bytes) = self.store.get(&key).await? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| RepositoryError::Decode {
                key,
                reason: e.to_string(),
            })
    }
}
