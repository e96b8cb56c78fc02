//! json-delta-util - shared helpers for json-delta
//!
//! Structural JSON equality (with an optional memoizing oracle) and a seeded
//! random document generator used by the diff tests.

pub mod fuzzer;
pub mod json_equal;

pub use fuzzer::Fuzzer;
pub use json_equal::{deep_equal, identical, numbers_equal, numbers_identical, EqualityOracle};
