//! Configuration types for saltyhash.
//!
//! `SaltyConfig` represents the `config.toml` in the data directory. Every
//! field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Default number of role lock shards.
pub const DEFAULT_LOCK_SHARDS: usize = 256;

/// Upper bound on role lock shards.
pub const MAX_LOCK_SHARDS: usize = 65_536;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaltyConfig {
    /// Size of the role lock table. Rounded up to a power of two.
    #[serde(default = "default_lock_shards")]
    pub lock_shards: usize,

    /// SQLite database file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

fn default_lock_shards() -> usize {
    DEFAULT_LOCK_SHARDS
}

fn default_database_file() -> String {
    "saltyhash.db".to_string()
}

impl Default for SaltyConfig {
    fn default() -> Self {
        Self {
            lock_shards: default_lock_shards(),
            database_file: default_database_file(),
        }
    }
}

impl SaltyConfig {
    /// The shard count actually used: clamped to `1..=MAX_LOCK_SHARDS` and
    /// rounded up to the next power of two.
    pub fn effective_lock_shards(&self) -> usize {
        self.lock_shards
            .clamp(1, MAX_LOCK_SHARDS)
            .next_power_of_two()
    }
}
