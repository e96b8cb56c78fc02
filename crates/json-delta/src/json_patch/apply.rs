//! JSON Patch apply logic.
//!
//! Operations are applied one at a time, in order, each against the document
//! as left by the previous one.

use json_delta_pointer::{get, get_mut, is_child, parse_index};
use json_delta_util::deep_equal;
use serde_json::Value;

use super::types::{Op, PatchError};

// ── Path navigation ───────────────────────────────────────────────────────

/// Mutable navigation to the parent container of `path` plus the last step.
fn parent_mut<'a, 'p>(
    doc: &'a mut Value,
    path: &'p [String],
) -> Result<(&'a mut Value, &'p str), PatchError> {
    let (key, parent_path) = path.split_last().ok_or(PatchError::InvalidTarget)?;
    let parent = get_mut(doc, parent_path).ok_or(PatchError::NotFound)?;
    Ok((parent, key.as_str()))
}

fn array_index(key: &str) -> Result<usize, PatchError> {
    parse_index(key).map_err(|_| PatchError::InvalidIndex)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
                return Ok(());
            }
            let idx = array_index(key)?;
            if idx > arr.len() {
                return Err(PatchError::InvalidIndex);
            }
            arr.insert(idx, value);
            Ok(())
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => map.remove(key).ok_or(PatchError::NotFound),
        Value::Array(arr) => {
            let idx = array_index(key)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }
    let (parent, key) = parent_mut(doc, path)?;
    let slot = match parent {
        Value::Object(map) => map.get_mut(key).ok_or(PatchError::NotFound)?,
        Value::Array(arr) => {
            let idx = array_index(key)?;
            arr.get_mut(idx).ok_or(PatchError::NotFound)?
        }
        _ => return Err(PatchError::InvalidTarget),
    };
    *slot = value;
    Ok(())
}

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    let src = get(doc, from).ok_or(PatchError::NotFound)?.clone();
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    if path == from {
        return get(doc, from).map(|_| ()).ok_or(PatchError::NotFound);
    }
    if is_child(from, path) {
        return Err(PatchError::InvalidTarget);
    }
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &[String], value: &Value) -> Result<(), PatchError> {
    let actual = get(doc, path).ok_or(PatchError::NotFound)?;
    if deep_equal(actual, value) {
        Ok(())
    } else {
        Err(PatchError::Test)
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document in place.
///
/// On error the document is left as it was before the operation.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(|_| ()),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => apply_test(doc, path, value),
    }
}

/// Apply a sequence of operations in order and return the final document.
///
/// Stops at the first failing operation.
pub fn apply_patch(mut doc: Value, ops: &[Op]) -> Result<Value, PatchError> {
    for op in ops {
        apply_op(&mut doc, op)?;
    }
    Ok(doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────
