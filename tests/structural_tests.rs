//! Integration tests for zip, intersection, difference and invoke.

#![cfg(feature = "structural")]

use rstest::rstest;
use underbar::UnderbarError;
use underbar::structural::{
    Invocable, difference, intersection, invoke, invoke_named, zip, zip_pair,
};

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn zip_pads_shorter_sequences_with_none() {
    assert_eq!(
        zip_pair(&['a', 'b', 'c', 'd'], &[1, 2, 3]),
        vec![
            (Some('a'), Some(1)),
            (Some('b'), Some(2)),
            (Some('c'), Some(3)),
            (Some('d'), None),
        ]
    );
}

#[rstest]
fn zip_groups_many_sequences_by_position() {
    let names = ["moe", "larry", "curly"];
    let ages = ["30", "40", "50"];
    let flags = ["true", "false"];

    let rows = zip(&names, &[&ages, &flags]);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec![Some("moe"), Some("30"), Some("true")]);
    assert_eq!(rows[2], vec![Some("curly"), Some("50"), None]);
}

#[rstest]
#[case(0, 0, 0)]
#[case(3, 0, 3)]
#[case(2, 5, 5)]
fn zip_length_is_longest_input(#[case] left: usize, #[case] right: usize, #[case] expected: usize) {
    let first: Vec<usize> = (0..left).collect();
    let second: Vec<usize> = (0..right).collect();
    assert_eq!(zip(&first, &[&second]).len(), expected);
    assert_eq!(zip_pair(&first, &second).len(), expected);
}

// =============================================================================
// intersection / difference
// =============================================================================

fn as_slices(rest: &[Vec<i32>]) -> Vec<&[i32]> {
    rest.iter().map(Vec::as_slice).collect()
}

#[rstest]
#[case(vec![1, 2, 3], vec![vec![101, 2, 1, 10], vec![2, 1]], vec![1, 2])]
#[case(vec![1, 1, 2, 2], vec![vec![2, 1]], vec![1, 2])]
#[case(vec![1, 2], vec![vec![]], vec![])]
#[case(vec![], vec![vec![1]], vec![])]
#[case(vec![3, 2, 1], vec![], vec![3, 2, 1])]
fn intersection_keeps_values_present_everywhere(
    #[case] first: Vec<i32>,
    #[case] rest: Vec<Vec<i32>>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(intersection(&first, &as_slices(&rest)), expected);
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5], vec![vec![5, 2, 10]], vec![1, 3, 4])]
#[case(vec![1, 2, 1], vec![vec![3], vec![4]], vec![1, 2, 1])]
#[case(vec![1, 2, 3], vec![vec![1], vec![2], vec![3]], vec![])]
#[case(vec![], vec![vec![1]], vec![])]
#[case(vec![4, 4], vec![], vec![4, 4])]
fn difference_removes_values_found_in_any_other(
    #[case] sequence: Vec<i32>,
    #[case] others: Vec<Vec<i32>>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(difference(&sequence, &as_slices(&others)), expected);
}

#[rstest]
fn set_operations_leave_inputs_untouched() {
    let first = vec![1, 2, 3];
    let second = vec![2, 3, 4];
    let _ = intersection(&first, &[&second]);
    let _ = difference(&first, &[&second]);
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![2, 3, 4]);
}

// =============================================================================
// invoke
// =============================================================================

#[rstest]
fn invoke_calls_function_with_each_element_as_receiver() {
    let mut lists = vec![vec![5, 1, 7], vec![3, 2, 1]];
    for list in &mut lists {
        list.sort_unstable();
    }
    let heads = invoke(&lists, |list, offset: &i32| list[0] + offset, &100);
    assert_eq!(heads, vec![101, 101]);
}

#[rstest]
fn invoke_named_dispatches_by_method_name() {
    let words = vec![" Moe ".to_string(), "larry".to_string()];
    assert_eq!(
        invoke_named(&words, "trim", &()),
        Ok(vec!["Moe".to_string(), "larry".to_string()])
    );
    assert_eq!(
        invoke_named(&words, "to_uppercase", &()),
        Ok(vec![" MOE ".to_string(), "LARRY".to_string()])
    );
}

#[rstest]
fn invoke_named_reports_unknown_method() {
    let words = ["a", "b"];
    assert_eq!(
        invoke_named(&words, "reverse", &()),
        Err(UnderbarError::UnknownMethod {
            receiver: "str",
            method: "reverse".to_string(),
        })
    );
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    balance: i64,
}

impl Invocable<i64> for Account {
    type Output = i64;

    fn invoke_method(&self, name: &str, amount: &i64) -> Result<i64, UnderbarError> {
        match name {
            "deposit" => Ok(self.balance + amount),
            "withdraw" => Ok(self.balance - amount),
            _ => Err(UnderbarError::UnknownMethod {
                receiver: "Account",
                method: name.to_string(),
            }),
        }
    }
}

#[rstest]
fn invoke_named_with_user_type_and_arguments() {
    let accounts = [Account { balance: 10 }, Account { balance: 50 }];
    assert_eq!(invoke_named(&accounts, "deposit", &5), Ok(vec![15, 55]));
    assert_eq!(invoke_named(&accounts, "withdraw", &20), Ok(vec![-10, 30]));
    assert!(invoke_named(&accounts, "close", &0).is_err());
}
