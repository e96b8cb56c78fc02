//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 wire
//! format: `{"op": "add", "path": "/a/0", "value": ...}`.

use json_delta_pointer::{
    format_json_pointer, parse_json_pointer, validate_json_pointer, validate_path,
};
use serde_json::{json, Map, Value};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(v: &Value) -> Result<Vec<String>, PatchError> {
    let s = v
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp("path must be a string".into()))?;
    validate_json_pointer(s).map_err(|e| PatchError::InvalidOp(format!("{e}: {s:?}")))?;
    let path = parse_json_pointer(s);
    validate_path(&path).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
    Ok(path)
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str, op: &str) -> Result<&'a Value, PatchError> {
    obj.get(key)
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires '{key}'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
///
/// ```
/// use json_delta::json_patch::{to_json, Op};
/// use serde_json::json;
///
/// let op = Op::Move { path: vec!["b".into()], from: vec!["a".into()] };
/// assert_eq!(to_json(&op), json!({"op": "move", "path": "/b", "from": "/a"}));
/// ```
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": encode_path(path)
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_path(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": encode_path(path),
            "value": value
        }),
    }
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single operation.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;
    let path = decode_path(required(obj, "path", op_str)?)?;

    match op_str {
        "add" => Ok(Op::Add {
            path,
            value: required(obj, "value", op_str)?.clone(),
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: required(obj, "value", op_str)?.clone(),
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: decode_path(required(obj, "from", op_str)?)?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: decode_path(required(obj, "from", op_str)?)?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: required(obj, "value", op_str)?.clone(),
        }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Serialize a list of operations into a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_wire_shapes() {
        let ops = vec![
            Op::Add { path: vec!["a".into(), "0".into()], value: json!(1) },
            Op::Remove { path: vec!["b".into()] },
            Op::Replace { path: vec![], value: json!([]) },
            Op::Move { path: vec!["1".into()], from: vec!["0".into()] },
        ];
        assert_eq!(
            to_json_patch(&ops),
            json!([
                {"op": "add", "path": "/a/0", "value": 1},
                {"op": "remove", "path": "/b"},
                {"op": "replace", "path": "", "value": []},
                {"op": "move", "path": "/1", "from": "/0"}
            ])
        );
    }

    #[test]
    fn escapes_keys_in_paths() {
        let op = Op::Add { path: vec!["a/b".into(), "m~n".into()], value: json!(null) };
        let v = to_json(&op);
        assert_eq!(v["path"], "/a~1b/m~0n");
        assert_eq!(from_json(&v).unwrap(), op);
    }

    #[test]
    fn ignores_unknown_members() {
        let v = json!({"op": "replace", "path": "/x", "value": "new", "oldValue": "old"});
        let op = from_json(&v).unwrap();
        assert_eq!(op, Op::Replace { path: vec!["x".into()], value: json!("new") });
        assert_eq!(to_json(&op), json!({"op": "replace", "path": "/x", "value": "new"}));
    }

    #[test]
    fn decodes_copy_and_test() {
        let ops = from_json_patch(&json!([
            {"op": "copy", "path": "/b", "from": "/a"},
            {"op": "test", "path": "/b", "value": 1}
        ]))
        .unwrap();
        assert_eq!(ops[0], Op::Copy { path: vec!["b".into()], from: vec!["a".into()] });
        assert_eq!(ops[1], Op::Test { path: vec!["b".into()], value: json!(1) });
    }

    #[test]
    fn rejects_malformed_ops() {
        let bad = [
            json!(1),
            json!({"path": "/a"}),
            json!({"op": "add", "path": "/a"}),
            json!({"op": "add", "value": 1}),
            json!({"op": "move", "path": "/a"}),
            json!({"op": "add", "path": "a", "value": 1}),
            json!({"op": "add", "path": 5, "value": 1}),
            json!({"op": "frobnicate", "path": "/a"}),
        ];
        for v in bad {
            assert!(matches!(from_json(&v), Err(PatchError::InvalidOp(_))), "{v}");
        }
        assert!(from_json_patch(&json!({})).is_err());
    }
}
