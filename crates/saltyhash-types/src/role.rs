//! Role types.
//!
//! A role binds a caller-supplied salt to a combination mode. Roles are
//! persisted one record per name under [`ROLE_KEY_PREFIX`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HashError;

/// Storage key prefix under which role records live.
pub const ROLE_KEY_PREFIX: &str = "roles/";

/// A validated role name.
///
/// Names start and end with a word character (`[A-Za-z0-9_]`) and may contain
/// `-` and `.` in between. A name is immutable once chosen; it is also the
/// storage key suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn parse(name: impl Into<String>) -> Result<Self, HashError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HashError::InvalidRequest("missing role name".to_string()));
        }

        let bytes = name.as_bytes();
        let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
        let edges_ok = is_word(bytes[0]) && is_word(bytes[bytes.len() - 1]);
        let body_ok = bytes
            .iter()
            .all(|&b| is_word(b) || b == b'-' || b == b'.');

        if !(edges_ok && body_ok) {
            return Err(HashError::InvalidRequest(format!(
                "invalid role name '{name}': must start and end with a letter, digit or '_' \
                 and contain only letters, digits, '_', '-' or '.'"
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of this role's record in the key-value store.
    pub fn storage_key(&self) -> String {
        format!("{ROLE_KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a role's salt is merged into the input before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaltMode {
    /// No combination: the input is hashed as-is.
    #[default]
    Passthrough,
    /// Salt placed after the input.
    Append,
    /// Salt placed before the input.
    Prepend,
}

impl SaltMode {
    /// The stored/wire representation (`""`, `"append"`, `"prepend"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SaltMode::Passthrough => "",
            SaltMode::Append => "append",
            SaltMode::Prepend => "prepend",
        }
    }

    /// Interpret a stored mode string.
    ///
    /// Unrecognized values fall back to [`SaltMode::Passthrough`]; writes are
    /// validated strictly through [`FromStr`].
    pub fn from_stored(mode: &str) -> Self {
        mode.parse().unwrap_or_default()
    }
}

impl FromStr for SaltMode {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SaltMode::Passthrough),
            "append" => Ok(SaltMode::Append),
            "prepend" => Ok(SaltMode::Prepend),
            other => Err(HashError::InvalidRequest(format!(
                "invalid mode '{other}': expected 'append', 'prepend' or empty"
            ))),
        }
    }
}

impl fmt::Display for SaltMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaltMode::Passthrough => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// The persisted role record.
///
/// `salt` is kept in its base64 text form exactly as supplied. Records written
/// before `mode` existed deserialize with an empty mode.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub salt: String,
    #[serde(default)]
    pub mode: String,
}

impl RoleEntry {
    pub fn salt_mode(&self) -> SaltMode {
        SaltMode::from_stored(&self.mode)
    }
}

impl fmt::Debug for RoleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleEntry")
            .field("salt", &"***")
            .field("mode", &self.mode)
            .finish()
    }
}

/// A partial role write. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleUpdate {
    pub salt: Option<String>,
    pub mode: Option<SaltMode>,
}

impl RoleUpdate {
    /// Merge this update over an existing record (or an empty one).
    pub fn apply(self, existing: Option<RoleEntry>) -> RoleEntry {
        let existing = existing.unwrap_or_default();
        RoleEntry {
            salt: self.salt.unwrap_or(existing.salt),
            mode: self
                .mode
                .map(|mode| mode.as_str().to_string())
                .unwrap_or(existing.mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_accepts_generic_names() {
        for name in ["test", "a", "my-role", "my.role_2", "_x_", "R0le"] {
            assert!(RoleName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_role_name_rejects_bad_names() {
        for name in ["-lead", "trail-", ".", "has/slash", "has space", "ümlaut"] {
            let err = RoleName::parse(name).unwrap_err();
            assert!(matches!(err, HashError::InvalidRequest(_)), "{name}");
        }
    }

    #[test]
    fn test_role_name_empty_is_missing() {
        let err = RoleName::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid request: missing role name");
    }

    #[test]
    fn test_storage_key() {
        let name = RoleName::parse("test").unwrap();
        assert_eq!(name.storage_key(), "roles/test");
    }

    #[test]
    fn test_salt_mode_strict_parse() {
        assert_eq!("".parse::<SaltMode>().unwrap(), SaltMode::Passthrough);
        assert_eq!("append".parse::<SaltMode>().unwrap(), SaltMode::Append);
        assert_eq!("prepend".parse::<SaltMode>().unwrap(), SaltMode::Prepend);
        let err = "foobar".parse::<SaltMode>().unwrap_err();
        assert!(err.to_string().contains("foobar"));
    }

    #[test]
    fn test_salt_mode_from_stored_is_lenient() {
        assert_eq!(SaltMode::from_stored("Append"), SaltMode::Passthrough);
        assert_eq!(SaltMode::from_stored("garbage"), SaltMode::Passthrough);
        assert_eq!(SaltMode::from_stored("prepend"), SaltMode::Prepend);
    }

    #[test]
    fn test_role_entry_json_layout() {
        let entry = RoleEntry {
            salt: "dGVzdFNhbHQ=".to_string(),
            mode: "append".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"salt": "dGVzdFNhbHQ=", "mode": "append"})
        );
    }

    #[test]
    fn test_role_entry_without_mode_defaults_empty() {
        let entry: RoleEntry = serde_json::from_str(r#"{"salt":"dGVzdFNhbHQ="}"#).unwrap();
        assert_eq!(entry.mode, "");
        assert_eq!(entry.salt_mode(), SaltMode::Passthrough);
    }

    #[test]
    fn test_role_entry_debug_hides_salt() {
        let entry = RoleEntry {
            salt: "c2VjcmV0".to_string(),
            mode: "append".to_string(),
        };
        let debug = format!("{entry:?}");
        assert!(!debug.contains("c2VjcmV0"));
        assert!(debug.contains("append"));
    }

    #[test]
    fn test_update_merges_unspecified_fields() {
        let existing = RoleEntry {
            salt: "czE=".to_string(),
            mode: "append".to_string(),
        };

        let mode_only = RoleUpdate {
            salt: None,
            mode: Some(SaltMode::Prepend),
        };
        let merged = mode_only.apply(Some(existing.clone()));
        assert_eq!(merged.salt, "czE=");
        assert_eq!(merged.mode, "prepend");

        let salt_only = RoleUpdate {
            salt: Some("czI=".to_string()),
            mode: None,
        };
        let merged = salt_only.apply(Some(existing));
        assert_eq!(merged.salt, "czI=");
        assert_eq!(merged.mode, "append");
    }

    #[test]
    fn test_update_without_existing_defaults_empty() {
        let update = RoleUpdate {
            salt: None,
            mode: Some(SaltMode::Append),
        };
        let entry = update.apply(None);
        assert_eq!(entry.salt, "");
        assert_eq!(entry.mode, "append");
    }
}
