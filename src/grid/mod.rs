//! Grid editing engine
//!
//! The editable grid is split into three layers:
//!
//! ```text
//! GridModel (holds the current Matrix)
//! ├── ops         pure row/cell mutations, Matrix -> Matrix
//! └── navigation  edit cursor state machine, commits through ops::set_cell
//! ```
//!
//! Row 0 is always the header row. Mutations never remove or reorder it;
//! requests that would are ignored and the input matrix is returned as-is.

mod model;
pub mod navigation;
pub mod ops;
mod position;

pub use model::{CellValue, GridError, GridModel, Matrix, Row};
pub use navigation::{EditCursor, EditState, NavKey};
pub use position::{column_label, CellPosition, ParsePositionError};
