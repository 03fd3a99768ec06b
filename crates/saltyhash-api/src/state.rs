//! Application state wiring the services together.
//!
//! Services are generic over the `KvStore` port; AppState pins them to the
//! SQLite implementation. Both services share one role store so they share
//! one lock table.

use std::path::Path;
use std::sync::Arc;

use saltyhash_core::role::store::RoleStore;
use saltyhash_core::service::hash::HashEngine;
use saltyhash_core::service::role::RoleService;
use saltyhash_infra::config::{load_config, resolve_data_dir};
use saltyhash_infra::sqlite::kv::SqliteKvStore;
use saltyhash_infra::sqlite::pool::{DatabasePool, database_url};

pub type ConcreteRoleService = RoleService<SqliteKvStore>;
pub type ConcreteHashEngine = HashEngine<SqliteKvStore>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub role_service: Arc<ConcreteRoleService>,
    pub hash_engine: Arc<ConcreteHashEngine>,
}

impl AppState {
    /// Initialize from the resolved data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_in(&resolve_data_dir()).await
    }

    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init_in(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let config = load_config(data_dir).await;

        let db_url = format!("{}?mode=rwc", database_url(data_dir, &config.database_file));
        let db_pool = DatabasePool::new(&db_url).await?;

        let roles = Arc::new(RoleStore::new(
            SqliteKvStore::new(db_pool),
            config.effective_lock_shards(),
        ));
        tracing::debug!(
            data_dir = %data_dir.display(),
            lock_shards = roles.locks().shard_count(),
            "application state initialized"
        );

        Ok(Self {
            role_service: Arc::new(RoleService::new(Arc::clone(&roles))),
            hash_engine: Arc::new(HashEngine::new(roles)),
        })
    }
}
