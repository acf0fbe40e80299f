//! Edit cursor state machine
//!
//! Handles cell activation, buffered keystrokes and Enter/Tab/arrow/Escape
//! navigation. The pending buffer is committed into the matrix through
//! [`ops::try_set_cell`] before the cursor moves, so the old cell always holds
//! its new value before the next cell's buffer is initialized.

use std::mem;

use super::model::{CellValue, Matrix};
use super::ops;
use super::position::CellPosition;

/// Keys that end or move an in-progress edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

impl NavKey {
    pub fn is_arrow(self) -> bool {
        matches!(self, NavKey::Up | NavKey::Down | NavKey::Left | NavKey::Right)
    }
}

/// Whether a cell is being edited, and its uncommitted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        position: CellPosition,
        pending: String,
    },
}

/// The single active edit cursor over a grid
#[derive(Debug, Clone, Default)]
pub struct EditCursor {
    state: EditState,
    /// Commit numeric-looking text as numbers instead of text
    coerce_numbers: bool,
}

impl EditCursor {
    pub fn new(coerce_numbers: bool) -> Self {
        Self {
            state: EditState::Idle,
            coerce_numbers,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Position of the cell being edited
    pub fn position(&self) -> Option<CellPosition> {
        match &self.state {
            EditState::Editing { position, .. } => Some(*position),
            EditState::Idle => None,
        }
    }

    /// Uncommitted text of the cell being edited
    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { pending, .. } => Some(pending),
            EditState::Idle => None,
        }
    }

    /// Activate a cell (click/focus)
    ///
    /// An edit already in progress is committed first. Returns the new
    /// matrix when that commit happened.
    pub fn activate(&mut self, matrix: &Matrix, position: CellPosition) -> Option<Matrix> {
        let committed = self.commit(matrix);
        self.begin(committed.as_ref().unwrap_or(matrix), position);
        committed
    }

    /// Replace the pending text (the editor's value after a keystroke)
    pub fn set_pending(&mut self, text: &str) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            text.clone_into(pending);
        }
    }

    /// Append a character to the pending text
    pub fn insert_char(&mut self, ch: char) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            pending.push(ch);
        }
    }

    /// Remove the last character of the pending text
    pub fn delete_backward(&mut self) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            pending.pop();
        }
    }

    /// Commit and go idle (focus lost)
    pub fn blur(&mut self, matrix: &Matrix) -> Option<Matrix> {
        self.commit(matrix)
    }

    /// Discard the pending text and go idle
    pub fn cancel(&mut self) {
        if let EditState::Editing { position, .. } = &self.state {
            tracing::debug!("Discarding edit of {}", position);
        }
        self.state = EditState::Idle;
    }

    /// Handle a navigation key while editing
    ///
    /// Returns the new matrix when the pending text was committed. Arrow
    /// keys at a grid edge are ignored and the edit stays open.
    pub fn handle_key(&mut self, matrix: &Matrix, key: NavKey) -> Option<Matrix> {
        let position = self.position()?;

        if key == NavKey::Escape {
            self.cancel();
            return None;
        }

        let target = next_position(position, key, matrix.row_count(), matrix.column_count());
        if key.is_arrow() && target.is_none() {
            return None;
        }

        let committed = self.commit(matrix);
        if let (Some(target), Some(updated)) = (target, committed.as_ref()) {
            self.begin(updated, target);
        }
        committed
    }

    fn begin(&mut self, matrix: &Matrix, position: CellPosition) {
        self.state = match matrix.get(position.row, position.col) {
            Some(cell) => EditState::Editing {
                position,
                pending: cell.to_string(),
            },
            None => {
                tracing::debug!(
                    "Ignoring activation of ({}, {}) outside the grid",
                    position.row,
                    position.col
                );
                EditState::Idle
            }
        };
    }

    fn commit(&mut self, matrix: &Matrix) -> Option<Matrix> {
        match mem::take(&mut self.state) {
            EditState::Idle => None,
            EditState::Editing { position, pending } => {
                let value = CellValue::from_input(&pending, self.coerce_numbers);
                ops::try_set_cell(matrix, position.row, position.col, value)
            }
        }
    }
}

/// Destination of a navigation key, or `None` when the key leaves the grid
fn next_position(
    from: CellPosition,
    key: NavKey,
    row_count: usize,
    col_count: usize,
) -> Option<CellPosition> {
    let CellPosition { row, col } = from;
    let has_row_below = row + 1 < row_count;
    let has_col_right = col + 1 < col_count;

    match key {
        NavKey::Enter | NavKey::Down => has_row_below.then(|| CellPosition::new(row + 1, col)),
        NavKey::Tab => {
            if has_col_right {
                Some(CellPosition::new(row, col + 1))
            } else if has_row_below {
                Some(CellPosition::new(row + 1, 0))
            } else {
                None
            }
        }
        NavKey::Up => (row > 0).then(|| CellPosition::new(row - 1, col)),
        NavKey::Left => (col > 0).then(|| CellPosition::new(row, col - 1)),
        NavKey::Right => has_col_right.then(|| CellPosition::new(row, col + 1)),
        NavKey::Escape => None,
    }
}
