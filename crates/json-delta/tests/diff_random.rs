mod common;

use common::{assert_roundtrip, ALL_OPTIONS};
use json_delta::json_patch_diff::compare;
use json_delta_util::Fuzzer;
use proptest::prelude::*;
use serde_json::Value;

#[test]
fn fuzzer_documents_roundtrip() {
    for seed in 0..64u8 {
        let fuzzer = Fuzzer::new(Some([seed; 32]));
        for _ in 0..20 {
            let src = fuzzer.random_value(4);
            let dst = fuzzer.mutate(&src);
            for opts in ALL_OPTIONS {
                assert_roundtrip(&src, &dst, opts);
            }
        }
    }
}

#[test]
fn fuzzer_unrelated_documents_roundtrip() {
    let fuzzer = Fuzzer::new(Some([42; 32]));
    for _ in 0..200 {
        let src = fuzzer.random_value(3);
        let dst = fuzzer.random_value(3);
        for opts in ALL_OPTIONS {
            assert_roundtrip(&src, &dst, opts);
        }
    }
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-4i64..4).prop_map(Value::from),
        "[ab/~]{0,2}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[abc/~]{0,2}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn compare_replays_to_target(src in arb_json(), dst in arb_json()) {
        for opts in ALL_OPTIONS {
            assert_roundtrip(&src, &dst, opts);
        }
    }

    #[test]
    fn compare_with_self_is_empty(doc in arb_json()) {
        for opts in ALL_OPTIONS {
            prop_assert!(compare(&doc, &doc.clone(), opts).is_empty());
        }
    }

    #[test]
    fn caching_is_transparent(src in arb_json(), dst in arb_json()) {
        for moves in [false, true] {
            let base = json_delta::DiffOptions { detect_move_operations: moves, do_caching: false };
            let cached = json_delta::DiffOptions { do_caching: true, ..base };
            prop_assert_eq!(compare(&src, &dst, base), compare(&src, &dst, cached));
        }
    }

    #[test]
    fn arrays_of_small_ints_roundtrip(
        src in prop::collection::vec(0u8..5, 0..16),
        dst in prop::collection::vec(0u8..5, 0..16),
    ) {
        let (src, dst) = (serde_json::json!(src), serde_json::json!(dst));
        for opts in ALL_OPTIONS {
            assert_roundtrip(&src, &dst, opts);
        }
    }
}
