//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! The differ walks both documents together. Objects are diffed key by key,
//! arrays are aligned with a linear-space Myers diff and reconciled into
//! index-correct `add`/`remove`/`replace`/`move` operations, and anything else
//! that differs is replaced wholesale. Every emitted path addresses the
//! document as left by the operations before it, so the patch replays in
//! order.

mod array;

use json_delta_pointer::child;
use json_delta_util::json_equal::{identical, EqualityOracle};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::json_patch::types::Op;

// ── Public API ────────────────────────────────────────────────────────────

/// Differ configuration.
///
/// Deserializes from the camelCase JSON form, with missing fields defaulting
/// to `false`:
///
/// ```
/// use json_delta::json_patch_diff::DiffOptions;
///
/// let opts: DiffOptions = serde_json::from_str(r#"{"detectMoveOperations": true}"#).unwrap();
/// assert!(opts.detect_move_operations);
/// assert!(!opts.do_caching);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffOptions {
    /// Turn a removed array element and an equal added element into one `move`.
    pub detect_move_operations: bool,
    /// Memoize equal sub-tree pairs for the duration of one `compare` call.
    pub do_caching: bool,
}

/// Generate a JSON Patch that transforms `left` into `right`.
///
/// Neither input is modified. The result is deterministic for a given pair
/// of documents and options; applying it to `left` in order yields a document
/// deep-equal to `right`.
///
/// `compare` never fails: an owned [`Value`] tree is finite and acyclic and
/// holds only JSON data.
///
/// # Examples
///
/// ```
/// use json_delta::json_patch::to_json_patch;
/// use json_delta::json_patch_diff::{compare, DiffOptions};
/// use serde_json::json;
///
/// let opts = DiffOptions { detect_move_operations: true, ..Default::default() };
/// let ops = compare(&json!([1, 2, 3]), &json!([2, 3, 1]), opts);
/// assert_eq!(
///     to_json_patch(&ops),
///     json!([{"op": "move", "path": "/2", "from": "/0"}])
/// );
/// ```
pub fn compare(left: &Value, right: &Value, options: DiffOptions) -> Vec<Op> {
    let mut ctx = DiffContext::new(options);
    diff_value(&mut ctx, &[], left, Some(right));
    debug!(
        ops = ctx.ops.len(),
        cached_pairs = ctx.oracle.cached_pairs(),
        moves = options.detect_move_operations,
        "compare finished"
    );
    ctx.ops
}

/// [`compare`] with default options.
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    compare(src, dst, DiffOptions::default())
}

// ── Context ───────────────────────────────────────────────────────────────

/// State for one `compare` call.
pub(crate) struct DiffContext<'a> {
    pub(crate) oracle: EqualityOracle<'a>,
    pub(crate) detect_moves: bool,
    pub(crate) ops: Vec<Op>,
}

impl<'a> DiffContext<'a> {
    fn new(options: DiffOptions) -> Self {
        Self {
            oracle: EqualityOracle::new(options.do_caching),
            detect_moves: options.detect_move_operations,
            ops: Vec::new(),
        }
    }
}

// ── Core recursive differ ─────────────────────────────────────────────────

/// Diff `left` against `right` at `path`; `right` is `None` when the key is
/// absent on the right-hand side.
pub(crate) fn diff_value<'a>(
    ctx: &mut DiffContext<'a>,
    path: &[String],
    left: &'a Value,
    right: Option<&'a Value>,
) {
    let Some(right) = right else {
        ctx.ops.push(Op::Remove { path: path.to_vec() });
        return;
    };
    if identical(left, right) {
        return;
    }
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => array::diff_array(ctx, path, l, r),
        (Value::Object(l), Value::Object(r)) => diff_obj(ctx, path, l, r),
        _ => ctx.ops.push(Op::Replace { path: path.to_vec(), value: right.clone() }),
    }
}

fn diff_obj<'a>(
    ctx: &mut DiffContext<'a>,
    path: &[String],
    left: &'a Map<String, Value>,
    right: &'a Map<String, Value>,
) {
    for (key, left_val) in left {
        diff_value(ctx, &child(path, key), left_val, right.get(key));
    }
    for (key, right_val) in right {
        if !left.contains_key(key) {
            ctx.ops.push(Op::Add { path: child(path, key), value: right_val.clone() });
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
