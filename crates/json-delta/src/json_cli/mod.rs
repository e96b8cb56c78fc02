//! Command-line tools for diffing and patching JSON documents.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-diff`: print the JSON Patch turning one document into another
//! - `json-patch`: apply a JSON Patch to a document

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::json_patch::codec::json::{from_json_patch, to_json_patch};
use crate::json_patch::{apply_patch, PatchError};
use crate::json_patch_diff::{compare, DiffOptions};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Patch(#[from] PatchError),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid --options: {0}")]
    Options(serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// Parsed `json-diff` command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    pub options: DiffOptions,
}

pub const DIFF_USAGE: &str =
    "Usage: json-diff <left.json> <right.json> [--moves] [--cache] [--options '<json>']";

/// Parse `json-diff` arguments (without the program name).
///
/// `--options` takes a JSON object in the [`DiffOptions`] camelCase form;
/// `--moves` and `--cache` switch the corresponding option on afterwards.
pub fn parse_diff_args<I>(args: I) -> Result<DiffArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut files = Vec::new();
    let mut options = DiffOptions::default();
    let mut moves = false;
    let mut cache = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--moves" => moves = true,
            "--cache" => cache = true,
            "--options" => {
                let raw = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--options requires a JSON argument".into()))?;
                options = serde_json::from_str(&raw).map_err(CliError::Options)?;
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown flag {flag}\n{DIFF_USAGE}")));
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }
    options.detect_move_operations |= moves;
    options.do_caching |= cache;
    match <[PathBuf; 2]>::try_from(files) {
        Ok([left, right]) => Ok(DiffArgs { left, right, options }),
        Err(_) => Err(CliError::Usage(DIFF_USAGE.into())),
    }
}

/// Diff two documents given as JSON strings.
///
/// Returns the patch as a pretty-printed JSON array.
pub fn diff_documents(
    left_json: &str,
    right_json: &str,
    options: DiffOptions,
) -> Result<String, CliError> {
    let left: Value = serde_json::from_str(left_json)?;
    let right: Value = serde_json::from_str(right_json)?;
    let ops = compare(&left, &right, options);
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

/// Read both files named in `args` and diff them.
pub fn diff_files(args: &DiffArgs) -> Result<String, CliError> {
    let read = |path: &PathBuf| {
        std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })
    };
    let left = read(&args.left)?;
    let right = read(&args.right)?;
    debug!(left = %args.left.display(), right = %args.right.display(), "diffing files");
    diff_documents(&left, &right, args.options)
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops_raw: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&ops_raw)?;
    debug!(ops = ops.len(), "applying patch");
    let result = apply_patch(doc, &ops)?;
    Ok(serde_json::to_string_pretty(&result)?)
}
