//! Sequence diff utilities.

pub mod seq;

pub use seq::{diff_blocks, Block, Blocks};
