//! Internal algorithms shared by the diff modules.

pub mod diff;
