//! Grid data model types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value
///
/// Cells are displayed as text regardless of variant. Edits commit as
/// `Text` unless numeric coercion is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Empty text cell
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    /// Build a cell from edited text, optionally coercing numeric input
    pub fn from_input(text: &str, coerce_numbers: bool) -> Self {
        if coerce_numbers {
            if let Ok(n) = text.trim().parse::<f64>() {
                if n.is_finite() {
                    return CellValue::Number(n);
                }
            }
        }
        CellValue::Text(text.to_string())
    }

    /// Borrow the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

/// One row of cells
pub type Row = Vec<CellValue>;

/// Rectangular grid of cells, row 0 being the header
///
/// A `Matrix` is treated as an immutable value: every mutation in
/// [`super::ops`] builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    /// Create an empty matrix (no rows)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a matrix from anything convertible into cells
    pub fn from_cells<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the header row
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// True when every row has the header's width
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Pad short rows with empty cells so every row has the widest row's width
    pub fn into_rectangular(self) -> Self {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = self
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize_with(width, CellValue::empty);
                row
            })
            .collect();
        Self { rows }
    }
}

/// Errors raised by direct grid access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Holder of the current matrix
///
/// `None` means nothing has been loaded yet, which is distinct from a
/// loaded matrix with zero rows.
#[derive(Debug, Clone, Default)]
pub struct GridModel {
    matrix: Option<Matrix>,
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an initial matrix, padding ragged rows to a rectangle
    pub fn load(&mut self, matrix: Matrix) {
        let matrix = if matrix.is_rectangular() {
            matrix
        } else {
            tracing::debug!("Padding ragged rows on load");
            matrix.into_rectangular()
        };
        tracing::info!(
            "Loaded grid with {} rows x {} columns",
            matrix.row_count(),
            matrix.column_count()
        );
        self.matrix = Some(matrix);
    }

    /// Swap in a new matrix wholesale
    pub fn replace(&mut self, matrix: Matrix) {
        self.matrix = Some(matrix);
    }

    pub fn is_loaded(&self) -> bool {
        self.matrix.is_some()
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue, GridError> {
        let (rows, cols) = self.shape();
        self.matrix
            .as_ref()
            .and_then(|m| m.get(row, col))
            .ok_or(GridError::OutOfRange {
                row,
                col,
                rows,
                cols,
            })
    }

    /// (row count, column count); (0, 0) when nothing is loaded
    pub fn shape(&self) -> (usize, usize) {
        self.matrix
            .as_ref()
            .map(|m| (m.row_count(), m.column_count()))
            .unwrap_or((0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_cells() {
        let m = Matrix::from_cells([["a", "b", "c"], ["1", "2", "3"]]);
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.get(1, 2), Some(&CellValue::from("3")));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_empty_matrix_shape() {
        let m = Matrix::new();
        assert!(m.is_empty());
        assert_eq!(m.column_count(), 0);
        assert!(m.is_rectangular());
    }

    #[test]
    fn test_into_rectangular_pads_short_rows() {
        let m = Matrix::from_cells(vec![vec!["a", "b", "c"], vec!["1"]]);
        assert!(!m.is_rectangular());

        let m = m.into_rectangular();
        assert!(m.is_rectangular());
        assert_eq!(m.get(1, 2), Some(&CellValue::empty()));
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::from("abc").to_string(), "abc");
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
    }

    #[test]
    fn test_cell_value_from_input() {
        assert_eq!(CellValue::from_input("42", false), CellValue::from("42"));
        assert_eq!(CellValue::from_input("42", true), CellValue::Number(42.0));
        assert_eq!(CellValue::from_input("4x", true), CellValue::from("4x"));
        assert_eq!(CellValue::from_input("NaN", true), CellValue::from("NaN"));
    }

    #[test]
    fn test_cell_value_json_untagged() {
        let m = Matrix::from_rows(vec![vec![CellValue::from("Row 1"), CellValue::Number(7.0)]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"[["Row 1",7.0]]"#);

        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_grid_model_unloaded_vs_empty() {
        let mut grid = GridModel::new();
        assert!(!grid.is_loaded());
        assert_eq!(grid.shape(), (0, 0));

        grid.load(Matrix::new());
        assert!(grid.is_loaded());
        assert_eq!(grid.shape(), (0, 0));
    }

    #[test]
    fn test_grid_model_get_out_of_range() {
        let mut grid = GridModel::new();
        grid.load(Matrix::from_cells([["a", "b"]]));

        assert_eq!(grid.get(0, 1).unwrap(), &CellValue::from("b"));
        assert_eq!(
            grid.get(1, 0),
            Err(GridError::OutOfRange {
                row: 1,
                col: 0,
                rows: 1,
                cols: 2
            })
        );
    }

    #[test]
    fn test_grid_model_load_pads_ragged() {
        let mut grid = GridModel::new();
        grid.load(Matrix::from_cells(vec![vec!["a"], vec!["1", "2"]]));
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.get(0, 1).unwrap(), &CellValue::empty());
    }
}
