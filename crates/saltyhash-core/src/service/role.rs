//! Role management service.
//!
//! Write (upsert), read, delete and list roles. Reads return only the salt;
//! the stored mode is not echoed back.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltyhash_types::error::HashError;
use saltyhash_types::response::{RoleListResponse, RoleResponse};
use saltyhash_types::role::{RoleName, RoleUpdate, SaltMode};
use serde_json::{Map, Value};

use crate::request::FieldData;
use crate::role::store::RoleStore;
use crate::service::role_lookup_error;
use crate::storage::kv_store::KvStore;

/// Payload fields accepted by a role write.
pub const ROLE_FIELDS: &[&str] = &["salt", "mode"];

pub struct RoleService<S: KvStore> {
    roles: Arc<RoleStore<S>>,
}

impl<S: KvStore> RoleService<S> {
    pub fn new(roles: Arc<RoleStore<S>>) -> Self {
        Self { roles }
    }

    /// Write a role from a raw payload (`salt`, `mode`; both optional).
    pub async fn write_role_request(
        &self,
        name: &str,
        payload: &Map<String, Value>,
    ) -> Result<(), HashError> {
        let data = FieldData::new(payload, ROLE_FIELDS);
        data.validate()?;
        self.write_role(name, data.get_str("salt")?, data.get_str("mode")?)
            .await
    }

    /// Create or update a role.
    ///
    /// Omitted fields keep their stored value (empty for a new role). The
    /// salt must be valid base64; the mode must be `append`, `prepend` or
    /// empty.
    pub async fn write_role(
        &self,
        name: &str,
        salt: Option<&str>,
        mode: Option<&str>,
    ) -> Result<(), HashError> {
        let name = RoleName::parse(name)?;
        let mode = mode.map(str::parse::<SaltMode>).transpose()?;
        if let Some(salt) = salt {
            STANDARD.decode(salt).map_err(|e| {
                HashError::InvalidRequest(format!("salt is not valid base64: {e}"))
            })?;
        }

        let update = RoleUpdate {
            salt: salt.map(str::to_string),
            mode,
        };
        self.roles.upsert(&name, update).await?;
        Ok(())
    }

    pub async fn read_role(&self, name: &str) -> Result<RoleResponse, HashError> {
        let name = RoleName::parse(name)?;
        match self.roles.get(&name).await {
            Ok(Some(entry)) => Ok(RoleResponse { salt: entry.salt }),
            Ok(None) => Err(HashError::InvalidRequest(format!("role not found: {name}"))),
            Err(err) => Err(role_lookup_error(&name, err)),
        }
    }

    /// Delete a role. Deleting a role that does not exist succeeds.
    pub async fn delete_role(&self, name: &str) -> Result<(), HashError> {
        let name = RoleName::parse(name)?;
        self.roles.delete(&name).await?;
        Ok(())
    }

    pub async fn list_roles(&self) -> Result<RoleListResponse, HashError> {
        let keys = self.roles.list().await?;
        Ok(RoleListResponse { keys })
    }
}
