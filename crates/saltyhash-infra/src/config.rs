//! Configuration loading.
//!
//! Reads `config.toml` from the data directory (`~/.saltyhash/` by default)
//! and deserializes it into [`SaltyConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use saltyhash_types::config::SaltyConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SALTYHASH_DATA_DIR";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`SaltyConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(data_dir: &Path) -> SaltyConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return SaltyConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SaltyConfig::default();
        }
    };

    match toml::from_str::<SaltyConfig>(&content) {
        Ok(config) => {
            if config.effective_lock_shards() != config.lock_shards {
                tracing::warn!(
                    configured = config.lock_shards,
                    effective = config.effective_lock_shards(),
                    "lock_shards adjusted to a power of two within range"
                );
            }
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            SaltyConfig::default()
        }
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SALTYHASH_DATA_DIR` environment variable
/// 2. `~/.saltyhash`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".saltyhash");
    }

    // Last resort: current directory
    PathBuf::from(".saltyhash")
}
