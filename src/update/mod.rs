//! Update functions for the Elm-style architecture
//!
//! All sheet state transformations flow through these functions.

mod edit;
mod rows;

use crate::commands::Cmd;
use crate::grid::Matrix;
use crate::messages::Msg;
use crate::model::Sheet;

pub use edit::update_edit;
pub use rows::update_rows;

/// Main update function - dispatches to sub-handlers
pub fn update(sheet: &mut Sheet, msg: Msg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");

    match msg {
        Msg::Load(matrix) => {
            sheet.cursor.cancel();
            sheet.grid.load(matrix);
            Some(Cmd::Redraw)
        }
        Msg::Edit(m) => edit::update_edit(sheet, m),
        Msg::Row(m) => rows::update_rows(sheet, m),
    }
}

/// Swap in the result of a commit or row operation
///
/// `None` means the operation was refused. A result equal to the current
/// matrix still counts as a change.
fn apply(sheet: &mut Sheet, updated: Option<Matrix>) -> Cmd {
    match updated {
        Some(matrix) => {
            sheet.grid.replace(matrix);
            Cmd::DataChanged
        }
        None => Cmd::Redraw,
    }
}
