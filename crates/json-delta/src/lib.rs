//! json-delta: compute and apply JSON Patches between JSON documents.
//!
//! [`json_patch_diff::compare`] produces an RFC 6902 style operation list
//! (`add`, `remove`, `replace`, `move`) that turns one document into another;
//! [`json_patch`] holds the operation types, their JSON wire form and an
//! applier.
//!
//! ```
//! use json_delta::json_patch::apply_op;
//! use json_delta::json_patch_diff::diff;
//! use serde_json::json;
//!
//! let src = json!({"tags": ["a", "b", "c"], "n": 1});
//! let dst = json!({"tags": ["a", "c"], "n": 2});
//!
//! let mut doc = src.clone();
//! for op in diff(&src, &dst) {
//!     apply_op(&mut doc, &op).unwrap();
//! }
//! assert_eq!(doc, dst);
//! ```

pub mod json_cli;
pub mod json_patch;
pub mod json_patch_diff;
pub mod util_inner;

pub use json_patch::{Op, PatchError};
pub use json_patch_diff::{compare, diff, DiffOptions};
