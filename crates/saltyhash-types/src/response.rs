//! Response payloads returned by the role and hashing operations.
//!
//! Field names match the wire contract: `salt`, `keys`, `sum`, `sums`.

use serde::{Deserialize, Serialize};

/// Result of reading a role.
///
/// Only the salt is returned; the stored mode is intentionally not echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub salt: String,
}

/// Result of listing roles. `keys` is empty (never absent) when no roles exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleListResponse {
    pub keys: Vec<String>,
}

/// Result of a single hash: lowercase hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResponse {
    pub sum: String,
}

/// Result of a batch hash: digests in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashBatchResponse {
    pub sums: Vec<String>,
}
