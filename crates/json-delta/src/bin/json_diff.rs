//! `json-diff`: print the JSON Patch that turns one document into another.
//!
//! Usage:
//!   json-diff <left.json> <right.json> [--moves] [--cache] [--options '<json>']
//!
//! `--moves` emits `move` operations for relocated array elements, `--cache`
//! memoizes sub-tree comparisons, and `--options` takes the same settings as
//! a JSON object (`{"detectMoveOperations": true, "doCaching": true}`).
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use std::io::{self, Write};

use json_delta::json_cli::{diff_files, parse_diff_args};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = parse_diff_args(std::env::args().skip(1)).and_then(|args| diff_files(&args));
    match result {
        Ok(patch) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{patch}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
