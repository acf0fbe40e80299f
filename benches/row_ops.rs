//! Benchmarks for row operations and edit navigation
//!
//! Run with: cargo bench row_ops

use sheetgrid::grid::ops;
use sheetgrid::grid::NavKey;
use sheetgrid::messages::EditMsg;
use sheetgrid::{placeholder, Sheet, SheetConfig};

fn main() {
    divan::main();
}

// ============================================================================
// Row operations
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn insert_middle(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("rows", rows, 10);
    bencher.bench(|| ops::insert_row(divan::black_box(&matrix), rows / 2));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn move_down_middle(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("rows", rows, 10);
    bencher.bench(|| ops::move_row_down(divan::black_box(&matrix), rows / 2));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn add_hundred_rows(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("rows", rows, 10);
    bencher.bench(|| ops::add_rows(divan::black_box(&matrix), 100));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn duplicate_last(bencher: divan::Bencher, rows: usize) {
    let matrix = placeholder::generate_for("rows", rows, 10);
    bencher.bench(|| ops::duplicate_last_row(divan::black_box(&matrix)));
}

// ============================================================================
// Editing
// ============================================================================

#[divan::bench]
fn tab_through_row() {
    let mut sheet = Sheet::with_matrix(
        placeholder::generate_for("edit", 100, 10),
        SheetConfig::default(),
    );
    sheet.dispatch(EditMsg::Activate { row: 50, col: 0 });
    for _ in 0..10 {
        sheet.dispatch(EditMsg::Input("value".into()));
        sheet.dispatch(EditMsg::Key(NavKey::Tab));
    }
    divan::black_box(sheet.matrix());
}
