//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sheetgrid::{CellValue, Matrix, Sheet, SheetConfig};

/// Build a matrix of text cells from string slices
pub fn grid(rows: &[&[&str]]) -> Matrix {
    Matrix::from_cells(rows.iter().map(|r| r.iter().copied()))
}

/// Header plus `data_rows` rows labeled `Row 1`..`Row n`, `cols` columns wide
pub fn labeled_grid(data_rows: usize, cols: usize) -> Matrix {
    let header = (0..cols).map(|c| format!("H{}", c)).collect::<Vec<_>>();
    let rows = (1..=data_rows).map(|r| {
        (0..cols)
            .map(|c| {
                if c == 0 {
                    format!("Row {}", r)
                } else {
                    format!("r{}c{}", r, c)
                }
            })
            .collect::<Vec<_>>()
    });
    Matrix::from_cells(std::iter::once(header).chain(rows))
}

/// Sheet with default config holding `matrix`
pub fn test_sheet(matrix: Matrix) -> Sheet {
    Sheet::with_matrix(matrix, SheetConfig::default())
}

/// Text of a cell, panicking when out of range
pub fn cell(sheet: &Sheet, row: usize, col: usize) -> String {
    sheet.grid.get(row, col).unwrap().to_string()
}

/// First column of every row as text
pub fn first_column(matrix: &Matrix) -> Vec<String> {
    matrix
        .rows()
        .iter()
        .map(|r| r.first().map(CellValue::to_string).unwrap_or_default())
        .collect()
}
