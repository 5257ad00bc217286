//! End-to-end tests of the full pipeline: validation, conversion,
//! enumeration, normal forms, and both minimization methods.

use karnaugh_logic::cover::{consensus, Form};
use karnaugh_logic::expression::ValidationError;
use karnaugh_logic::{Assignment, BoolFunction, Syntax};
use pretty_assertions::assert_eq;

#[test]
fn test_conjunction_scenario() {
    // "a & b": rows in order FF, FT, TF, TT; only the last is true
    let function = BoolFunction::parse("a & b").unwrap();

    let rows: Vec<(Vec<bool>, bool)> = function
        .table()
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

    let index = function.table().index_form();
    assert_eq!(index.binary, "0001");
    assert_eq!(index.decimal, 1u8.into());
}

#[test]
fn test_disjunction_with_negation_scenario() {
    // "a | !b" over {a, b}
    let function = BoolFunction::parse("a | !b").unwrap();
    assert_eq!(
        function.forms().dnf().to_string(),
        "(!a & !b) | (a & !b) | (a & b)"
    );
}

#[test]
fn test_consecutive_operator_error_scenario() {
    // must fail with the consecutive-operators error, never a different one
    let err = BoolFunction::parse("a & | b").unwrap_err();
    assert_eq!(
        err.to_string(),
        karnaugh_logic::expression::ValidationError::ConsecutiveOperators { position: 2 }
            .to_string()
    );
    let direct =
        karnaugh_logic::Expression::parse("a & | b", &Syntax::default()).unwrap_err();
    assert_eq!(direct, ValidationError::ConsecutiveOperators { position: 2 });
}

#[test]
fn test_all_true_two_variable_map_is_constant() {
    let function = BoolFunction::parse("a | !a | b").unwrap();
    let map = function.karnaugh_map().unwrap();
    let cover = map.minimize(Form::Dnf);
    assert_eq!(cover.len(), 1);
    assert_eq!(cover.terms()[0].literal_count(), 0);
    assert_eq!(cover.to_string(), "1");
}

fn assignments_of(function: &BoolFunction) -> Vec<(Assignment, bool)> {
    (0..function.table().rows().len())
        .map(|row| {
            (
                function.table().assignment(row).unwrap(),
                function.table().rows()[row].result(),
            )
        })
        .collect()
}

#[test_log::test]
fn test_canonical_forms_and_minimizers_agree_everywhere() {
    let inputs = [
        "a & b",
        "a | !b",
        "a -> b & c",
        "a ~ b | !c",
        "(a | b) & (c | d)",
        "a & b | !a & c | b & !c",
        "!(a & b) -> (c ~ d)",
    ];
    for input in inputs {
        let function = BoolFunction::parse(input).unwrap();
        let forms = function.forms();
        let minimal_dnf = function.minimal_dnf();
        let minimal_cnf = function.minimal_cnf();
        let map = function.karnaugh_map().unwrap();
        let karnaugh_dnf = map.minimize(Form::Dnf);
        let karnaugh_cnf = map.minimize(Form::Cnf);

        assert!(minimal_dnf.literal_count() <= forms.dnf().literal_count());
        assert!(minimal_cnf.literal_count() <= forms.cnf().literal_count());

        for (assignment, expected) in assignments_of(&function) {
            assert_eq!(function.expression().evaluate(&assignment).unwrap(), expected);
            assert_eq!(forms.dnf().evaluate(&assignment), expected, "{}", input);
            assert_eq!(forms.cnf().evaluate(&assignment), expected, "{}", input);
            assert_eq!(minimal_dnf.evaluate(&assignment), expected, "{}", input);
            assert_eq!(minimal_cnf.evaluate(&assignment), expected, "{}", input);
            assert_eq!(karnaugh_dnf.evaluate(&assignment), expected, "{}", input);
            assert_eq!(karnaugh_cnf.evaluate(&assignment), expected, "{}", input);
        }
    }
}

#[test]
fn test_five_variable_pipeline() {
    let function = BoolFunction::parse("a & b | c & d | !e").unwrap();
    assert_eq!(function.table().rows().len(), 32);

    let map = function.karnaugh_map().unwrap();
    let cover = map.minimize(Form::Dnf);
    for (assignment, expected) in assignments_of(&function) {
        assert_eq!(cover.evaluate(&assignment), expected);
    }
}

#[test]
fn test_coverage_matrix_covers_every_canonical_term() {
    let function = BoolFunction::parse("a & b | !a & c").unwrap();
    let canonical = function.forms().dnf();
    let minimized = consensus::minimize(canonical);
    let matrix = minimized.coverage_matrix(canonical);

    assert_eq!(matrix.len(), minimized.len());
    for column in 0..canonical.len() {
        assert!(
            matrix.iter().any(|row| row[column]),
            "canonical term {} is uncovered",
            column
        );
    }
}

#[test]
fn test_distinct_alphabets_coexist() {
    let latin = BoolFunction::parse("a & b").unwrap();
    let syntax = Syntax::new(['p', 'q', 'r']);
    let other = BoolFunction::parse_with_syntax("p | q & r", &syntax).unwrap();

    assert_eq!(latin.expression().variables(), &['a', 'b']);
    assert_eq!(other.expression().variables(), &['p', 'q', 'r']);
}
