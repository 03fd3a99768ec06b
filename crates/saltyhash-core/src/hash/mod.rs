//! Pure hashing building blocks.
//!
//! - `registry`: algorithm identifier -> fresh accumulator
//! - `combine`: merges a salt into an input per a `SaltMode`

pub mod combine;
pub mod registry;
