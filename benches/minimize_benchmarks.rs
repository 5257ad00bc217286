//! Benchmark suite comparing the two minimization paths
//!
//! Runs both minimizers over the same functions at increasing variable
//! counts, plus the table-derivation stage on its own, so regressions in
//! the exponential parts show up separately from the covering search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karnaugh_logic::cover::{consensus, Form};
use karnaugh_logic::{BoolFunction, NormalForms, TruthTable};

/// Functions with a spread of term counts per variable count.
const CASES: &[(&str, &str)] = &[
    ("3vars", "a & b | !a & c | b & !c"),
    ("4vars", "a & b | c & d | !a & !d"),
    ("5vars", "a & b | c & d & e | !a & c | b & !e"),
];

fn bench_table_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");
    for &(name, input) in CASES {
        let function = BoolFunction::parse(input).unwrap();
        let expression = function.expression().clone();
        group.bench_with_input(BenchmarkId::from_parameter(name), &expression, |b, expr| {
            b.iter(|| {
                let table = TruthTable::build(black_box(expr)).unwrap();
                NormalForms::derive(&table)
            })
        });
    }
    group.finish();
}

fn bench_consensus(c: &mut Criterion) {
    let mut group = c.benchmark_group("consensus");
    for &(name, input) in CASES {
        let function = BoolFunction::parse(input).unwrap();
        let canonical = function.forms().dnf().clone();
        group.bench_with_input(BenchmarkId::from_parameter(name), &canonical, |b, cover| {
            b.iter(|| consensus::minimize(black_box(cover)))
        });
    }
    group.finish();
}

fn bench_karnaugh(c: &mut Criterion) {
    let mut group = c.benchmark_group("karnaugh");
    for &(name, input) in CASES {
        let function = BoolFunction::parse(input).unwrap();
        let map = function.karnaugh_map().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &map, |b, map| {
            b.iter(|| map.minimize(black_box(Form::Dnf)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_table_derivation,
    bench_consensus,
    bench_karnaugh
);
criterion_main!(benches);
