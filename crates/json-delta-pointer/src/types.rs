//! Type definitions for JSON Pointer paths.

/// A single reference token: an object key or a decimal array index.
pub type PathStep = String;

/// A parsed JSON Pointer. The empty path addresses the document root.
pub type Path = Vec<PathStep>;
