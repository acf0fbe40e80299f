//! Edit cursor update functions
//!
//! Handles EditMsg messages: activation, buffered typing and navigation keys.

use super::apply;
use crate::commands::Cmd;
use crate::grid::{CellPosition, EditCursor};
use crate::messages::EditMsg;
use crate::model::Sheet;

/// Handle edit cursor messages
///
/// Returns `None` when nothing is loaded or when typing arrives with no
/// active cell.
pub fn update_edit(sheet: &mut Sheet, msg: EditMsg) -> Option<Cmd> {
    let matrix = sheet.grid.matrix()?;

    let committed = match msg {
        EditMsg::Activate { row, col } => {
            sheet.cursor.activate(matrix, CellPosition::new(row, col))
        }
        EditMsg::Input(text) => return buffer_edit(sheet, |c| c.set_pending(&text)),
        EditMsg::InsertChar(ch) => return buffer_edit(sheet, |c| c.insert_char(ch)),
        EditMsg::DeleteBackward => return buffer_edit(sheet, |c| c.delete_backward()),
        EditMsg::Key(key) => sheet.cursor.handle_key(matrix, key),
        EditMsg::Blur => sheet.cursor.blur(matrix),
    };

    Some(apply(sheet, committed))
}

/// Apply a keystroke to the pending buffer; the matrix is untouched
fn buffer_edit(sheet: &mut Sheet, edit: impl FnOnce(&mut EditCursor)) -> Option<Cmd> {
    if !sheet.cursor.is_editing() {
        return None;
    }
    edit(&mut sheet.cursor);
    Some(Cmd::Redraw)
}
