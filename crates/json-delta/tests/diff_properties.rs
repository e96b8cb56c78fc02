mod common;

use common::{assert_roundtrip, wire, ALL_OPTIONS};
use json_delta::json_patch_diff::{compare, diff, DiffOptions};
use serde_json::json;

const MOVES: DiffOptions = DiffOptions { detect_move_operations: true, do_caching: false };

#[test]
fn identical_documents_produce_no_ops() {
    let docs = [
        json!(null),
        json!(true),
        json!(-0.0),
        json!("text"),
        json!([]),
        json!({}),
        json!({"a": [1, {"b": [null, "x"]}], "c": {"d": 2.5}}),
    ];
    for doc in &docs {
        for opts in ALL_OPTIONS {
            assert!(compare(doc, doc, opts).is_empty(), "{doc}");
            assert!(compare(doc, &doc.clone(), opts).is_empty(), "{doc}");
        }
    }
}

#[test]
fn object_key_order_is_not_significant() {
    assert!(diff(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})).is_empty());
    assert!(diff(
        &json!({"x": {"p": [1, 2], "q": null}}),
        &json!({"x": {"q": null, "p": [1, 2]}})
    )
    .is_empty());
}

#[test]
fn pure_append() {
    assert_eq!(
        wire(&json!([1, 2, 3]), &json!([1, 2, 3, 4]), DiffOptions::default()),
        json!([{"op": "add", "path": "/3", "value": 4}])
    );
}

#[test]
fn pure_prepend() {
    assert_eq!(
        wire(&json!([1, 2, 3]), &json!([0, 1, 2, 3]), DiffOptions::default()),
        json!([{"op": "add", "path": "/0", "value": 0}])
    );
}

#[test]
fn interior_delete() {
    assert_eq!(
        wire(&json!([1, 2, 3, 4]), &json!([1, 3, 4]), DiffOptions::default()),
        json!([{"op": "remove", "path": "/1"}])
    );
}

#[test]
fn replace_collapse() {
    assert_eq!(
        wire(&json!([1, 2, 3]), &json!([1, 9, 3]), DiffOptions::default()),
        json!([{"op": "replace", "path": "/1", "value": 9}])
    );
}

#[test]
fn move_detection() {
    let ops = wire(&json!([1, 2, 3]), &json!([2, 3, 1]), MOVES);
    assert!(ops.as_array().is_some_and(|ops| ops.iter().all(|op| op["op"] == "move")));
    assert_eq!(ops, json!([{"op": "move", "path": "/2", "from": "/0"}]));
}

#[test]
fn type_change_replaces_root() {
    assert_eq!(
        wire(&json!({"a": 1}), &json!([1]), DiffOptions::default()),
        json!([{"op": "replace", "path": "", "value": [1]}])
    );
    assert_eq!(
        wire(&json!(1), &json!("1"), DiffOptions::default()),
        json!([{"op": "replace", "path": "", "value": "1"}])
    );
}

#[test]
fn nested_documents_roundtrip() {
    let cases = [
        (
            json!({"users": [{"id": 1, "tags": ["a"]}, {"id": 2, "tags": []}], "v": 1}),
            json!({"users": [{"id": 2, "tags": ["b"]}, {"id": 1, "tags": ["a", "c"]}], "v": 2}),
        ),
        (
            json!([[1, 2, 3], [4, 5], [6]]),
            json!([[6], [1, 3], [4, 5, 7], []]),
        ),
        (
            json!({"a": {"b": {"c": [1, [2, [3, [4]]]]}}}),
            json!({"a": {"b": {"c": [1, [2, [3, [5]]]], "d": null}}}),
        ),
        (json!([1, "1", true, null, {}, []]), json!([[], {}, null, true, "1", 1])),
        (json!({"": 1, "/": 2, "~": 3}), json!({"": [1], "~1": 2, "~": 3})),
    ];
    for (src, dst) in &cases {
        for opts in ALL_OPTIONS {
            assert_roundtrip(src, dst, opts);
            assert_roundtrip(dst, src, opts);
        }
    }
}

#[test]
fn caching_does_not_change_output() {
    let src = json!({"rows": [[1, 2], [3, 4], [5, 6], {"k": [7]}], "meta": {"n": 4}});
    let dst = json!({"rows": [[3, 4], [1, 2], {"k": [7]}, [5, 6, 7]], "meta": {"n": 5}});
    for moves in [false, true] {
        let opts = DiffOptions { detect_move_operations: moves, do_caching: false };
        let plain = compare(&src, &dst, opts);
        let cached = compare(&src, &dst, DiffOptions { do_caching: true, ..opts });
        assert_eq!(plain, cached);
    }
}

#[test]
fn long_array_single_insert_is_one_add() {
    let src: Vec<u32> = (0..5_000).collect();
    let mut dst = src.clone();
    dst.insert(2_500, 99_999);
    let ops = wire(&json!(src), &json!(dst), DiffOptions::default());
    assert_eq!(ops, json!([{"op": "add", "path": "/2500", "value": 99_999}]));
}
