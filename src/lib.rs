//! sheetgrid - CSV grid editing engine
//!
//! This crate provides the CSV codec, the grid data model, row operations
//! and the edit cursor state machine for an interactive spreadsheet-style
//! editor, wired together with the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod grid;
pub mod logging;
pub mod messages;
pub mod model;
pub mod placeholder;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SheetConfig;
pub use grid::{CellPosition, CellValue, Matrix};
pub use messages::Msg;
pub use model::Sheet;
