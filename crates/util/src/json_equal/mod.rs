//! JSON equality utilities.
//!
//! [`deep_equal`] is the stateless structural comparison; [`EqualityOracle`]
//! wraps it with an optional per-call cache of composite pairs already found
//! equal. [`identical`] is the stricter identity check used before any
//! structural work is done.

mod deep_equal;
mod oracle;

pub use deep_equal::{deep_equal, identical, numbers_equal, numbers_identical};
pub use oracle::EqualityOracle;
