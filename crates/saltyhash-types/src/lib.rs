//! Shared domain types for saltyhash.
//!
//! This crate contains the types used across the saltyhash workspace: roles,
//! combination modes, the closed set of hash algorithms, request/response
//! payloads, configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod response;
pub mod role;
