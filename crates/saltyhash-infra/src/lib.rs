//! Infrastructure layer for saltyhash.
//!
//! Contains implementations of the `KvStore` port defined in `saltyhash-core`
//! (SQLite with WAL mode, and an in-process map) plus configuration loading
//! from the data directory.

pub mod config;
pub mod sqlite;
pub mod storage;
