//! Message types for the Elm-style architecture
//!
//! Every host interaction with a sheet is one of these messages.

use crate::grid::{CellValue, Matrix, NavKey};

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Replace the sheet contents (upload or placeholder)
    Load(Matrix),
    /// Cell editing and navigation
    Edit(EditMsg),
    /// Structural row operations and direct cell writes
    Row(RowMsg),
}

/// Edit cursor messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Cell clicked or focused
    Activate { row: usize, col: usize },
    /// Editor text changed to this value
    Input(String),
    /// Character typed at the end of the editor text
    InsertChar(char),
    /// Backspace
    DeleteBackward,
    /// Navigation or cancel key
    Key(NavKey),
    /// Editor lost focus
    Blur,
}

/// Row action menu and bulk actions
#[derive(Debug, Clone, PartialEq)]
pub enum RowMsg {
    /// Insert a blank row below `index` ("add row below header" when 0)
    InsertBelow(usize),
    Delete(usize),
    MoveUp(usize),
    MoveDown(usize),
    /// Append `n` labeled rows
    Add(usize),
    /// Remove up to `n` rows from the end
    DeleteLast(usize),
    DuplicateLast,
    /// Write a value directly, bypassing the edit cursor
    SetCell {
        row: usize,
        col: usize,
        value: CellValue,
    },
}

impl From<EditMsg> for Msg {
    fn from(msg: EditMsg) -> Self {
        Msg::Edit(msg)
    }
}

impl From<RowMsg> for Msg {
    fn from(msg: RowMsg) -> Self {
        Msg::Row(msg)
    }
}
