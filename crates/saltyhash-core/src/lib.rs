//! Role store, hash engine and storage port for saltyhash.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! (saltyhash-infra) implements, the sharded-lock role store built on top of
//! it, and the services that combine salts with inputs and hash them. It
//! depends only on `saltyhash-types` -- never on `saltyhash-infra` or any
//! database/IO crate.

pub mod hash;
pub mod request;
pub mod role;
pub mod service;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
