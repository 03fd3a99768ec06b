//! Sharded role lock table.
//!
//! A fixed number of `RwLock`s, created once when the table is built. A role
//! name maps to a shard by hashing it, so memory stays bounded no matter how
//! many roles exist. Distinct names that land in the same shard serialize
//! against each other; that false contention is accepted.

use sha2::{Digest, Sha256};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct ShardedLocks {
    shards: Box<[RwLock<()>]>,
    mask: usize,
}

impl ShardedLocks {
    /// Build a table of `count` shards, rounded up to a power of two (minimum 1).
    pub fn new(count: usize) -> Self {
        let count = count.max(1).next_power_of_two();
        let shards = (0..count).map(|_| RwLock::new(())).collect();
        Self {
            shards,
            mask: count - 1,
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard guarding `key`.
    pub fn shard_index(&self, key: &str) -> usize {
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) as usize) & self.mask
    }

    /// Shared lock on the shard guarding `key`.
    pub async fn read(&self, key: &str) -> RwLockReadGuard<'_, ()> {
        self.shards[self.shard_index(key)].read().await
    }

    /// Exclusive lock on the shard guarding `key`.
    pub async fn write(&self, key: &str) -> RwLockWriteGuard<'_, ()> {
        self.shards[self.shard_index(key)].write().await
    }
}
