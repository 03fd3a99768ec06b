//! Hash engine.
//!
//! Resolves a role, decodes its salt, combines it with the input, hashes the
//! result and hex-encodes the digest. The batch entry point resolves the role
//! and algorithm once, then hashes every input with one accumulator that is
//! reset between items. A batch is all-or-nothing: the first bad input fails
//! the whole call and no digests are returned.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltyhash_types::error::HashError;
use saltyhash_types::response::{HashBatchResponse, HashResponse};
use saltyhash_types::role::{RoleName, SaltMode};
use serde_json::{Map, Value};

use crate::hash::combine::combine;
use crate::hash::registry;
use crate::request::FieldData;
use crate::role::store::RoleStore;
use crate::service::role_lookup_error;
use crate::storage::kv_store::KvStore;

/// Payload fields accepted by single and batch hash requests.
pub const HASH_FIELDS: &[&str] = &["input"];

/// Decoded snapshot of a role, held for one request only.
struct ResolvedRole {
    salt: Vec<u8>,
    mode: SaltMode,
}

pub struct HashEngine<S: KvStore> {
    roles: Arc<RoleStore<S>>,
}

impl<S: KvStore> HashEngine<S> {
    pub fn new(roles: Arc<RoleStore<S>>) -> Self {
        Self { roles }
    }

    /// Single hash from a raw payload: `{input}` -> `{sum}`.
    pub async fn hash_request(
        &self,
        role_name: &str,
        algorithm: &str,
        payload: &Map<String, Value>,
    ) -> Result<HashResponse, HashError> {
        let data = FieldData::new(payload, HASH_FIELDS);
        data.validate()?;
        let input = data.get_str("input")?.unwrap_or_default();

        let sum = self.hash(role_name, algorithm, input).await?;
        Ok(HashResponse { sum })
    }

    /// Batch hash from a raw payload: `{input: [...]}` -> `{sums: [...]}`.
    pub async fn hash_batch_request(
        &self,
        role_name: &str,
        algorithm: &str,
        payload: &Map<String, Value>,
    ) -> Result<HashBatchResponse, HashError> {
        let data = FieldData::new(payload, HASH_FIELDS);
        data.validate()?;
        let inputs = data.get_str_list("input")?.unwrap_or_default();

        let sums = self.hash_batch(role_name, algorithm, &inputs).await?;
        Ok(HashBatchResponse { sums })
    }

    /// Hash one base64-encoded input under `role_name` with `algorithm`.
    ///
    /// Returns the lowercase hex digest.
    #[tracing::instrument(name = "hash", skip(self, input), fields(role = %role_name, algorithm = %algorithm))]
    pub async fn hash(
        &self,
        role_name: &str,
        algorithm: &str,
        input: &str,
    ) -> Result<String, HashError> {
        let input = decode_input(input).map_err(|reason| {
            HashError::InvalidInput(format!(
                "input either empty or contains invalid base64: {reason}"
            ))
        })?;

        let role = self.resolve_role(role_name).await?;
        let mut accumulator = registry::resolve(algorithm)?;

        accumulator.write(&combine(&input, &role.salt, role.mode));
        let sum = hex::encode(accumulator.sum());

        tracing::debug!("input hashed");
        Ok(sum)
    }

    /// Hash every base64-encoded input in order under one role and algorithm.
    ///
    /// Digests come back one-to-one with `inputs`. Fails with
    /// `InvalidInput` naming the index of the first empty or undecodable
    /// item, in which case nothing is returned.
    #[tracing::instrument(
        name = "hash_batch",
        skip(self, inputs),
        fields(role = %role_name, algorithm = %algorithm, batch_size = inputs.len())
    )]
    pub async fn hash_batch<I: AsRef<str>>(
        &self,
        role_name: &str,
        algorithm: &str,
        inputs: &[I],
    ) -> Result<Vec<String>, HashError> {
        let role = self.resolve_role(role_name).await?;
        let mut accumulator = registry::resolve(algorithm)?;

        let mut sums = Vec::with_capacity(inputs.len());
        for (index, encoded) in inputs.iter().enumerate() {
            let input = decode_input(encoded.as_ref()).map_err(|reason| {
                tracing::debug!(index, "batch rejected");
                HashError::InvalidInput(format!(
                    "input at index {index} either empty or contains invalid base64: {reason}"
                ))
            })?;

            accumulator.write(&combine(&input, &role.salt, role.mode));
            sums.push(hex::encode(accumulator.sum_reset()));
        }

        tracing::debug!("batch hashed");
        Ok(sums)
    }

    /// Look the role up under its shard's shared lock and decode its salt.
    async fn resolve_role(&self, role_name: &str) -> Result<ResolvedRole, HashError> {
        let name = RoleName::parse(role_name)?;

        let entry = match self.roles.get(&name).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                return Err(HashError::InvalidRequest(format!(
                    "unable to find role {name}"
                )));
            }
            Err(err) => return Err(role_lookup_error(&name, err)),
        };

        let salt = STANDARD.decode(&entry.salt).map_err(|e| {
            tracing::warn!(role = %name, "stored salt is not valid base64");
            HashError::InvalidRequest(format!(
                "unable to decode salt of role {name} as base64: {e}"
            ))
        })?;

        Ok(ResolvedRole {
            salt,
            mode: entry.salt_mode(),
        })
    }
}

fn decode_input(encoded: &str) -> Result<Vec<u8>, String> {
    let bytes = STANDARD.decode(encoded).map_err(|e| e.to_string())?;
    if bytes.is_empty() {
        return Err("decoded to zero bytes".to_string());
    }
    Ok(bytes)
}
