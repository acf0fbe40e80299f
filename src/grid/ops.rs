//! Row and cell mutations
//!
//! Every operation takes the current matrix and returns a new one. When a
//! precondition fails (header protection, bounds) the operation is a no-op
//! and returns an unchanged copy with only a debug log.
//!
//! Each operation has a `try_` form returning `None` instead of the copy,
//! for callers that need to tell a refused operation from one that ran.

use super::model::{CellValue, Matrix, Row};

/// Prefix used for generated row labels in the first column
pub const ROW_LABEL_PREFIX: &str = "Row ";

fn row_label(n: usize) -> CellValue {
    CellValue::Text(format!("{}{}", ROW_LABEL_PREFIX, n))
}

/// Whether a cell looks like a generated `Row {n}` label
///
/// This is a plain text match; a user value such as `Row 12` is
/// indistinguishable from a generated label.
pub fn is_row_label(cell: &CellValue) -> bool {
    cell.as_text()
        .and_then(|s| s.strip_prefix(ROW_LABEL_PREFIX))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn blank_row(width: usize) -> Row {
    vec![CellValue::empty(); width]
}

/// Blank row of the given width with `label` in its first cell
fn labeled_row(width: usize, label: usize) -> Row {
    let mut row = blank_row(width);
    if let Some(first) = row.first_mut() {
        *first = row_label(label);
    }
    row
}

/// Return the applied result, or an unchanged copy when refused
fn or_unchanged(matrix: &Matrix, applied: Option<Matrix>) -> Matrix {
    applied.unwrap_or_else(|| matrix.clone())
}

/// Replace a single cell
pub fn set_cell(matrix: &Matrix, row: usize, col: usize, value: impl Into<CellValue>) -> Matrix {
    or_unchanged(matrix, try_set_cell(matrix, row, col, value))
}

/// Replace a single cell, or `None` when the position is out of range
pub fn try_set_cell(
    matrix: &Matrix,
    row: usize,
    col: usize,
    value: impl Into<CellValue>,
) -> Option<Matrix> {
    if matrix.get(row, col).is_none() {
        tracing::debug!("set_cell: ({}, {}) out of range, ignoring", row, col);
        return None;
    }

    let mut rows = matrix.rows().to_vec();
    rows[row][col] = value.into();
    Some(Matrix::from_rows(rows))
}

/// Insert a blank row immediately after `after`
///
/// Inserting below the header leaves the new row unlabeled; inserting below
/// a data row labels it `Row {row_count}` using the count before insertion.
pub fn insert_row(matrix: &Matrix, after: usize) -> Matrix {
    or_unchanged(matrix, try_insert_row(matrix, after))
}

pub fn try_insert_row(matrix: &Matrix, after: usize) -> Option<Matrix> {
    let row_count = matrix.row_count();
    if after >= row_count {
        tracing::debug!("insert_row: index {} out of range, ignoring", after);
        return None;
    }

    let width = matrix.column_count();
    let new_row = if after == 0 {
        blank_row(width)
    } else {
        labeled_row(width, row_count)
    };

    let mut rows = matrix.rows().to_vec();
    rows.insert(after + 1, new_row);
    Some(Matrix::from_rows(rows))
}

/// Remove the row at `index`; the header row cannot be removed
pub fn delete_row(matrix: &Matrix, index: usize) -> Matrix {
    or_unchanged(matrix, try_delete_row(matrix, index))
}

pub fn try_delete_row(matrix: &Matrix, index: usize) -> Option<Matrix> {
    if index == 0 || index >= matrix.row_count() {
        tracing::debug!("delete_row: refusing index {}", index);
        return None;
    }

    let mut rows = matrix.rows().to_vec();
    rows.remove(index);
    Some(Matrix::from_rows(rows))
}

/// Swap row `index` with the row above it
///
/// Rows 0 and 1 cannot move up: nothing may move above the first data row.
pub fn move_row_up(matrix: &Matrix, index: usize) -> Matrix {
    or_unchanged(matrix, try_move_row_up(matrix, index))
}

pub fn try_move_row_up(matrix: &Matrix, index: usize) -> Option<Matrix> {
    if index <= 1 || index >= matrix.row_count() {
        tracing::debug!("move_row_up: refusing index {}", index);
        return None;
    }

    let mut rows = matrix.rows().to_vec();
    rows.swap(index, index - 1);
    Some(Matrix::from_rows(rows))
}

/// Swap row `index` with the row below it
pub fn move_row_down(matrix: &Matrix, index: usize) -> Matrix {
    or_unchanged(matrix, try_move_row_down(matrix, index))
}

pub fn try_move_row_down(matrix: &Matrix, index: usize) -> Option<Matrix> {
    // the last row has nothing below it
    if index == 0 || index >= matrix.row_count().saturating_sub(1) {
        tracing::debug!("move_row_down: refusing index {}", index);
        return None;
    }

    let mut rows = matrix.rows().to_vec();
    rows.swap(index, index + 1);
    Some(Matrix::from_rows(rows))
}

/// Append `count` labeled rows, continuing the row count sequence
pub fn add_rows(matrix: &Matrix, count: usize) -> Matrix {
    or_unchanged(matrix, try_add_rows(matrix, count))
}

pub fn try_add_rows(matrix: &Matrix, count: usize) -> Option<Matrix> {
    if matrix.is_empty() || count == 0 {
        tracing::debug!("add_rows: nothing to add");
        return None;
    }

    let width = matrix.column_count();
    let start = matrix.row_count();

    let mut rows = matrix.rows().to_vec();
    if rows.try_reserve(count).is_err() {
        tracing::debug!("add_rows: cannot allocate {} rows", count);
        return None;
    }
    rows.extend((0..count).map(|i| labeled_row(width, start + i)));
    Some(Matrix::from_rows(rows))
}

/// Remove up to `count` rows from the end, never touching the header
pub fn delete_last_rows(matrix: &Matrix, count: usize) -> Matrix {
    or_unchanged(matrix, try_delete_last_rows(matrix, count))
}

pub fn try_delete_last_rows(matrix: &Matrix, count: usize) -> Option<Matrix> {
    let row_count = matrix.row_count();
    if row_count <= 1 || count == 0 {
        tracing::debug!("delete_last_rows: no data rows to remove");
        return None;
    }

    let removed = count.min(row_count - 1);
    let mut rows = matrix.rows().to_vec();
    rows.truncate(row_count - removed);
    Some(Matrix::from_rows(rows))
}

/// Append a copy of the last data row
///
/// A `Row {n}` label in the first cell is renumbered for the copy.
pub fn duplicate_last_row(matrix: &Matrix) -> Matrix {
    or_unchanged(matrix, try_duplicate_last_row(matrix))
}

pub fn try_duplicate_last_row(matrix: &Matrix) -> Option<Matrix> {
    let row_count = matrix.row_count();
    if row_count <= 1 {
        tracing::debug!("duplicate_last_row: no data row to copy");
        return None;
    }

    let mut copy = matrix.rows()[row_count - 1].clone();
    if let Some(first) = copy.first_mut() {
        if is_row_label(first) {
            // new row count is row_count + 1, so its label is row_count
            *first = row_label(row_count);
        }
    }

    let mut rows = matrix.rows().to_vec();
    rows.push(copy);
    Some(Matrix::from_rows(rows))
}
