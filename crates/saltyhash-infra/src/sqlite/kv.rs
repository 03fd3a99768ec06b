//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `saltyhash-core` using sqlx with split read/write pools.
//! Values are stored as opaque blobs.

use chrono::Utc;
use saltyhash_core::storage::kv_store::{KvStore, child_keys};
use saltyhash_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(e.to_string())
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.map(|row| row.try_get::<Vec<u8>, _>("value"))
            .transpose()
            .map_err(query_error)
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO kv_store (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, RepositoryError> {
        // substr() rather than LIKE so '_' and '%' in the prefix match literally.
        let rows = sqlx::query(
            "SELECT key FROM kv_store WHERE substr(key, 1, length(?)) = ? ORDER BY key",
        )
        .bind(prefix)
        .bind(prefix)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let keys = rows
            .iter()
            .map(|row| row.try_get::<String, _>("key"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error)?;

        Ok(child_keys(prefix, keys.iter().map(String::as_str)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use saltyhash_core::role::store::RoleStore;
    use saltyhash_core::service::hash::HashEngine;
    use saltyhash_core::service::role::RoleService;

    use super::*;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = SqliteKvStore::new(test_pool().await);

        store.put("roles/test", br#"{"salt":"c2FsdA=="}"#).await.unwrap();
        let got = store.get("roles/test").await.unwrap();
        assert_eq!(got.as_deref(), Some(&br#"{"salt":"c2FsdA=="}"#[..]));
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let store = SqliteKvStore::new(test_pool().await);
        assert!(store.get("roles/missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_upserts() {
        let pool = test_pool().await;
        let store = SqliteKvStore::new(pool.clone());

        store.put("counter", b"1").await.unwrap();
        store.put("counter", b"2").await.unwrap();
        assert_eq!(store.get("counter").await.unwrap(), Some(b"2".to_vec()));

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SqliteKvStore::new(test_pool().await);

        store.put("temp", b"value").await.unwrap();
        store.delete("temp").await.unwrap();
        assert!(store.get("temp").await.unwrap().is_none());

        // Should not error
        store.delete("temp").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_children_sorted() {
        let store = SqliteKvStore::new(test_pool().await);

        for key in ["roles/gamma", "roles/alpha", "roles/beta", "other/x", "roles/a/b"] {
            store.put(key, b"x").await.unwrap();
        }

        let keys = store.list("roles/").await.unwrap();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_list_prefix_is_literal() {
        let store = SqliteKvStore::new(test_pool().await);

        store.put("ro_es/a", b"x").await.unwrap();
        store.put("roles/b", b"x").await.unwrap();

        assert_eq!(store.list("ro_es/").await.unwrap(), vec!["a"]);
        assert!(store.list("nothing/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_services_over_sqlite() {
        let roles = Arc::new(RoleStore::new(SqliteKvStore::new(test_pool().await), 16));
        let service = RoleService::new(Arc::clone(&roles));
        let engine = HashEngine::new(roles);

        service
            .write_role("test", Some("dGVzdFNhbHQ="), Some("prepend"))
            .await
            .unwrap();

        let sums = engine
            .hash_batch("test", "sha2-512", &["dGVzdFNlY3JldA=="])
            .await
            .unwrap();
        assert_eq!(
            sums[0],
            "10f3d4b214fac7de2d3519e945cddfd61c8505ff3d8151b56690f372e8957ee6\
             2c22d9b8725f8baa99f62abf759e4b6be77b443fb6f93041cb8df15fd48c239b"
        );

        service.delete_role("test").await.unwrap();
        assert!(service.list_roles().await.unwrap().keys.is_empty());
    }
}
