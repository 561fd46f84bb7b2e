//! Serialization tests for nested sequences.

#![cfg(all(feature = "serde", feature = "structural"))]

use rstest::rstest;
use underbar::nested;
use underbar::structural::{Nested, flatten};

#[rstest]
fn nested_serializes_as_plain_json_arrays() {
    let values: Vec<Nested<i32>> = nested![1, [2, [3, [4]], 5]];
    assert_eq!(serde_json::to_string(&values).unwrap(), "[1,[2,[3,[4]],5]]");
}

#[rstest]
fn nested_deserializes_from_plain_json_arrays() {
    let values: Vec<Nested<String>> = serde_json::from_str(r#"["a", [], [["b"], "c"]]"#).unwrap();
    assert_eq!(flatten(&values), vec!["a", "b", "c"]);
    assert_eq!(values[1], Nested::branch([]));
}

#[rstest]
fn nested_rejects_mismatched_leaf_types() {
    let result: Result<Vec<Nested<u8>>, _> = serde_json::from_str(r#"[1, ["two"]]"#);
    assert!(result.is_err());
}
