//! Storage abstractions for saltyhash.
//!
//! Defines the key-value store port. Implementations live in saltyhash-infra.

pub mod kv_store;
