//! Placeholder data for a sheet with no uploaded content
//!
//! Produces a header of `Column A`, `Column B`, ... and data rows whose
//! first cell is `Row {n}`. The remaining columns cycle through an integer,
//! a two-decimal value and a `Value {row}-{col}` string.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{column_label, CellValue, Matrix, Row};

/// Generate a `rows` x `cols` placeholder matrix, header row included
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    if rows == 0 {
        return Matrix::new();
    }

    let header: Row = (0..cols)
        .map(|c| CellValue::Text(format!("Column {}", column_label(c))))
        .collect();

    let mut matrix = Vec::with_capacity(rows);
    matrix.push(header);

    for i in 1..rows {
        let row = (0..cols)
            .map(|j| match j {
                0 => CellValue::Text(format!("Row {}", i)),
                j if j % 3 == 0 => CellValue::Number(rng.gen_range(0..1000u32) as f64),
                j if j % 3 == 1 => CellValue::Text(format!("{:.2}", rng.gen_range(0.0..100.0))),
                j => CellValue::Text(format!("Value {}-{}", i, j)),
            })
            .collect();
        matrix.push(row);
    }

    Matrix::from_rows(matrix)
}

/// Deterministic placeholder for a given name (e.g. an uploaded file name)
pub fn generate_for(name: &str, rows: usize, cols: usize) -> Matrix {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    tracing::debug!("Generating {}x{} placeholder for '{}'", rows, cols, name);
    generate(rows, cols, &mut rng)
}
