//! JSON Patch (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! The differ in [`crate::json_patch_diff`] produces `add`, `remove`,
//! `replace` and `move`; `copy` and `test` are accepted when decoding and
//! applying hand-written patches.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_op, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{Op, PatchError};
