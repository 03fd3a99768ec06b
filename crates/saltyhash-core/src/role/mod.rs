//! Role persistence.
//!
//! - `locks`: fixed-size sharded lock table keyed by role name
//! - `store`: CRUD over role records on top of a `KvStore`

pub mod locks;
pub mod store;
