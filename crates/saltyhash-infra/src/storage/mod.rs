//! Non-SQL storage adapters.

pub mod memory;
