//! Tests for the truth-table module

use super::*;
use crate::Syntax;
use num_bigint::BigUint;

fn table_for(input: &str) -> TruthTable {
    let expr = Expression::parse(input, &Syntax::default()).unwrap();
    TruthTable::build(&expr).unwrap()
}

#[test]
fn test_enumeration_order_and_results() {
    let table = table_for("a & b");
    assert_eq!(table.variables(), &['a', 'b']);

    let rows: Vec<(Vec<bool>, bool)> = table
        .rows()
        .iter()
        .map(|row| (row.values().to_vec(), row.result()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (vec![false, false], false),
            (vec![false, true], false),
            (vec![true, false], false),
            (vec![true, true], true),
        ]
    );
}

#[test]
fn test_row_count_is_power_of_two() {
    assert_eq!(table_for("a").rows().len(), 2);
    assert_eq!(table_for("a & b").rows().len(), 4);
    assert_eq!(table_for("a & b | c").rows().len(), 8);
    assert_eq!(table_for("a & b | c & d").rows().len(), 16);
}

#[test]
fn test_first_variable_is_most_significant() {
    let table = table_for("a | b");
    // row 2 is a=1, b=0
    assert_eq!(table.rows()[2].values(), &[true, false]);
    let assignment = table.assignment(2).unwrap();
    assert_eq!(assignment[&'a'], true);
    assert_eq!(assignment[&'b'], false);
}

#[test]
fn test_index_form() {
    let index = table_for("a & b").index_form();
    assert_eq!(index.binary, "0001");
    assert_eq!(index.decimal, BigUint::from(1u8));

    let index = table_for("a | b").index_form();
    assert_eq!(index.binary, "0111");
    assert_eq!(index.decimal, BigUint::from(7u8));
}

#[test]
fn test_index_form_decimal_matches_binary() {
    for input in ["a -> b", "a ~ b | c", "!a & b -> c ~ d"] {
        let index = table_for(input).index_form();
        let parsed = BigUint::parse_bytes(index.binary.as_bytes(), 2).unwrap();
        assert_eq!(index.decimal, parsed, "index form of {}", input);
    }
}

#[test]
fn test_detailed_table_columns() {
    let expr = Expression::parse("a & !b", &Syntax::default()).unwrap();
    let table = TruthTable::build_detailed(&expr).unwrap();
    assert_eq!(table.subexpressions(), &["!b", "(a & !b)"]);

    let columns: Vec<(Vec<bool>, bool)> = table
        .rows()
        .iter()
        .map(|row| (row.sub_results().to_vec(), row.result()))
        .collect();
    assert_eq!(
        columns,
        vec![
            (vec![true, false], false),
            (vec![false, false], false),
            (vec![true, true], true),
            (vec![false, false], false),
        ]
    );
}

#[test]
fn test_from_results_round_trip() {
    let built = table_for("a ~ b");
    let results: Vec<bool> = built.rows().iter().map(|row| row.result()).collect();
    let rebuilt = TruthTable::from_results(vec!['a', 'b'], results).unwrap();
    assert_eq!(rebuilt, built);
}

#[test]
fn test_from_results_rejects_bad_length() {
    let err = TruthTable::from_results(vec!['a', 'b'], vec![true, false, true]).unwrap_err();
    assert_eq!(
        err,
        TableError::RowCountMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn test_display_contains_rows() {
    let text = table_for("a & b").to_string();
    assert!(text.starts_with("a | b | F"));
    assert!(text.contains("1 | 1 | 1"));
}
