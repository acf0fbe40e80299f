//! Row operation update functions
//!
//! Handles RowMsg messages from the row action menus.

use super::apply;
use crate::commands::Cmd;
use crate::grid::ops;
use crate::messages::RowMsg;
use crate::model::Sheet;

/// Handle row and direct cell messages
///
/// Opening a row menu takes focus from the cell editor, so a pending edit
/// is committed before the operation runs. That commit is reported even
/// when the operation itself is refused.
pub fn update_rows(sheet: &mut Sheet, msg: RowMsg) -> Option<Cmd> {
    let matrix = sheet.grid.matrix()?;
    let committed = sheet.cursor.blur(matrix);
    let base = committed.as_ref().unwrap_or(matrix);

    let updated = match msg {
        RowMsg::InsertBelow(index) => ops::try_insert_row(base, index),
        RowMsg::Delete(index) => ops::try_delete_row(base, index),
        RowMsg::MoveUp(index) => ops::try_move_row_up(base, index),
        RowMsg::MoveDown(index) => ops::try_move_row_down(base, index),
        RowMsg::Add(count) => ops::try_add_rows(base, count),
        RowMsg::DeleteLast(count) => ops::try_delete_last_rows(base, count),
        RowMsg::DuplicateLast => ops::try_duplicate_last_row(base),
        RowMsg::SetCell { row, col, value } => ops::try_set_cell(base, row, col, value),
    };

    Some(apply(sheet, updated.or(committed)))
}
