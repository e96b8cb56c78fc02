use json_delta::json_cli::{apply_json_patch, diff_documents, diff_files, parse_diff_args, CliError};
use json_delta::DiffOptions;
use serde_json::{json, Value};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("json-delta-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn diff_files_then_apply() {
    let left = r#"{"items": ["a", "b", "c"], "count": 3}"#;
    let right = r#"{"items": ["c", "a", "b"], "count": 3, "done": true}"#;
    let left_path = write_temp("left.json", left);
    let right_path = write_temp("right.json", right);

    let args = parse_diff_args(vec![
        left_path.display().to_string(),
        right_path.display().to_string(),
        "--moves".to_string(),
    ])
    .unwrap();
    let patch = diff_files(&args).unwrap();
    let patch_value: Value = serde_json::from_str(&patch).unwrap();
    assert_eq!(
        patch_value,
        json!([
            {"op": "move", "path": "/items/0", "from": "/items/2"},
            {"op": "add", "path": "/done", "value": true}
        ])
    );

    let patched: Value = serde_json::from_str(&apply_json_patch(left, &patch).unwrap()).unwrap();
    assert_eq!(patched, serde_json::from_str::<Value>(right).unwrap());
}

#[test]
fn invalid_inputs_surface_as_errors() {
    assert!(matches!(
        diff_documents("[1,", "[]", DiffOptions::default()),
        Err(CliError::Json(_))
    ));
    assert!(matches!(
        apply_json_patch("{}", r#"[{"op": "add"}]"#),
        Err(CliError::Patch(_))
    ));
}
