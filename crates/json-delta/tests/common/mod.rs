#![allow(dead_code)]

use json_delta::json_patch::{apply_op, to_json_patch, Op};
use json_delta::json_patch_diff::{compare, DiffOptions};
use json_delta_util::deep_equal;
use serde_json::Value;

pub const ALL_OPTIONS: [DiffOptions; 4] = [
    DiffOptions { detect_move_operations: false, do_caching: false },
    DiffOptions { detect_move_operations: true, do_caching: false },
    DiffOptions { detect_move_operations: false, do_caching: true },
    DiffOptions { detect_move_operations: true, do_caching: true },
];

/// Replay `ops` on a copy of `doc`, panicking with the failing op.
pub fn replay(doc: &Value, ops: &[Op]) -> Value {
    let mut out = doc.clone();
    for (i, op) in ops.iter().enumerate() {
        if let Err(e) = apply_op(&mut out, op) {
            panic!("op #{i} {op:?} failed with {e} on {out}\nfull patch: {}", to_json_patch(ops));
        }
    }
    out
}

/// Diff, replay, and check the result deep-equals `dst`. Returns the patch.
pub fn assert_roundtrip(src: &Value, dst: &Value, options: DiffOptions) -> Vec<Op> {
    let ops = compare(src, dst, options);
    let out = replay(src, &ops);
    assert!(
        deep_equal(&out, dst),
        "replay mismatch with {options:?}\nsrc:   {src}\ndst:   {dst}\ngot:   {out}\npatch: {}",
        to_json_patch(&ops)
    );
    ops
}

/// The patch in wire form, for readable assertions.
pub fn wire(src: &Value, dst: &Value, options: DiffOptions) -> Value {
    to_json_patch(&assert_roundtrip(src, dst, options))
}
