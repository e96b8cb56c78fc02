//! JSON Pointer (RFC 6901) paths.
//!
//! Patches produced by `json-delta` address their targets with JSON Pointers.
//! Internally a pointer is kept as a [`Path`] (one unescaped `String` per
//! reference token); this crate converts between the two forms and resolves
//! paths against `serde_json` documents.
//!
//! # Example
//!
//! ```
//! use json_delta_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path, ValidationError};

/// Unescapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// ```
/// use json_delta_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("plain"), "plain");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a reference token for use inside a JSON Pointer string.
///
/// ```
/// use json_delta_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into its reference tokens.
///
/// The empty string is the root (no tokens); `"/"` is a single empty key.
/// A pointer without the leading `/` is read as relative, so `"a/b"` yields
/// the same tokens as `"/a/b"`. Use [`validate_json_pointer`] to reject it.
///
/// ```
/// use json_delta_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// assert_eq!(parse_json_pointer("a/b"), vec!["a", "b"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let tokens = pointer.strip_prefix('/').unwrap_or(pointer);
    tokens.split('/').map(unescape_component).collect()
}

/// Format reference tokens as a JSON Pointer string.
///
/// ```
/// use json_delta_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "0".to_string()]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Build the path of a child slot: `path` followed by `step`.
///
/// ```
/// use json_delta_pointer::child;
///
/// let root: Vec<String> = Vec::new();
/// let items = child(&root, "items");
/// assert_eq!(child(&items, 3), vec!["items", "3"]);
/// ```
pub fn child(path: &[String], step: impl ToString) -> Path {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.extend_from_slice(path);
    out.push(step.to_string());
    out
}

/// Check if `parent` is a strict prefix of `child`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if a string is a canonical non-negative array index (no leading zeros).
///
/// ```
/// use json_delta_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("42"));
/// assert!(!is_valid_index("042"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("-"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

/// Parse an array index token.
///
/// # Errors
///
/// Returns [`JsonPointerError::InvalidIndex`] if the token is not a canonical
/// index.
pub fn parse_index(step: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(step) {
        return Err(JsonPointerError::InvalidIndex);
    }
    step.parse().map_err(|_| JsonPointerError::InvalidIndex)
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path does not resolve. The `-` token never resolves
/// because it names the slot past the end of an array.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(parse_index(step).ok()?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(parse_index(step).ok()?)?,
            Value::Object(map) => map.get_mut(step)?,
            _ => return None,
        };
    }
    Some(current)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("INVALID_INDEX")]
    InvalidIndex,
}
