//! Business logic services (use cases).
//!
//! Services sit between a transport (or the CLI) and the role store. They
//! validate payloads, map storage outcomes onto the caller-facing error
//! taxonomy, and run the hashing pipeline. They depend on the `KvStore`
//! trait -- never on concrete infrastructure implementations.

pub mod hash;
pub mod role;

use saltyhash_types::error::{HashError, RepositoryError};
use saltyhash_types::role::RoleName;

/// Map a failed role lookup onto the caller-facing taxonomy.
///
/// An unreadable record is a bad request naming the role; anything else is
/// the store itself failing.
fn role_lookup_error(name: &RoleName, err: RepositoryError) -> HashError {
    match err {
        RepositoryError::Decode { reason, .. } => {
            tracing::warn!(role = %name, %reason, "stored role record is unreadable");
            HashError::InvalidRequest(format!("unable to read role {name}: {reason}"))
        }
        other => HashError::StorageFailure(other),
    }
}
