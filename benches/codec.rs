//! Benchmarks for CSV parsing and serialization
//!
//! Run with: cargo bench codec

use sheetgrid::csv::{parse, parse_with, serialize, serialize_with, Dialect};
use sheetgrid::placeholder;

fn main() {
    divan::main();
}

fn sample_text(rows: usize) -> String {
    serialize(&placeholder::generate_for("bench.csv", rows, 10))
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_lenient(bencher: divan::Bencher, rows: usize) {
    let text = sample_text(rows);
    bencher.bench(|| parse(divan::black_box(&text)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_strict(bencher: divan::Bencher, rows: usize) {
    let text = sample_text(rows);
    bencher.bench(|| parse_with(divan::black_box(&text), Dialect::strict()));
}

#[divan::bench]
fn parse_quoted_fields() {
    let text = "name,\"street, city\",notes\n".repeat(5_000);
    parse(divan::black_box(&text));
}

// ============================================================================
// Serialization
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn serialize_lenient(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("bench.csv", rows, 10);
    bencher.bench(|| serialize(divan::black_box(&matrix)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn serialize_strict(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("bench.csv", rows, 10);
    bencher.bench(|| serialize_with(divan::black_box(&matrix), Dialect::strict()));
}
