use std::fmt;

use crate::commands::Cmd;
use crate::config::SheetConfig;
use crate::csv::{self, CodecError};
use crate::grid::{EditCursor, GridModel, Matrix};
use crate::messages::Msg;
use crate::placeholder;
use crate::update::update;

/// Callback fired with the new matrix after every committed change
pub type ChangeListener = Box<dyn FnMut(&Matrix)>;

/// One editable sheet: the grid, its edit cursor and the host's listener
pub struct Sheet {
    /// Current matrix
    pub grid: GridModel,
    /// Active cell and pending edit buffer
    pub cursor: EditCursor,
    /// Codec and editing settings
    pub config: SheetConfig,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sheet")
            .field("grid", &self.grid)
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl Sheet {
    /// Create an empty, not-yet-loaded sheet
    pub fn new(config: SheetConfig) -> Self {
        Self {
            grid: GridModel::new(),
            cursor: EditCursor::new(config.coerce_numbers),
            config,
            on_change: None,
        }
    }

    /// Create a sheet already holding `matrix`
    pub fn with_matrix(matrix: Matrix, config: SheetConfig) -> Self {
        let mut sheet = Self::new(config);
        sheet.load(matrix);
        sheet
    }

    /// Register the host's change listener, replacing any previous one
    pub fn on_change(&mut self, listener: impl FnMut(&Matrix) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Replace the contents; any edit in progress is discarded
    pub fn load(&mut self, matrix: Matrix) {
        self.dispatch(Msg::Load(matrix));
    }

    /// Parse text with the configured dialect and load it
    pub fn load_text(&mut self, text: &str) -> Result<(), CodecError> {
        let matrix = csv::parse_with(text, self.config.dialect())?;
        self.load(matrix);
        Ok(())
    }

    /// Decode raw file bytes with the configured dialect and load them
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let matrix = csv::decode_with(bytes, self.config.dialect())?;
        self.load(matrix);
        Ok(())
    }

    /// Load generated placeholder data seeded from `name`
    pub fn load_placeholder(&mut self, name: &str) {
        let matrix = placeholder::generate_for(
            name,
            self.config.placeholder_rows,
            self.config.placeholder_cols,
        );
        self.load(matrix);
    }

    /// Current matrix, `None` until something is loaded
    pub fn matrix(&self) -> Option<&Matrix> {
        self.grid.matrix()
    }

    /// Run one message through [`update`] and notify the listener on change
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> Option<Cmd> {
        let cmd = update(self, msg.into());

        if cmd.is_some_and(Cmd::data_changed) {
            if let (Some(listener), Some(matrix)) = (self.on_change.as_mut(), self.grid.matrix()) {
                listener(matrix);
            }
        }

        cmd
    }

    /// Serialize the committed matrix with the configured dialect
    ///
    /// Pending (uncommitted) edit text is not included. An unloaded sheet
    /// exports as empty text.
    pub fn export_text(&self) -> Result<String, CodecError> {
        match self.grid.matrix() {
            Some(matrix) => {
                let text = csv::serialize_with(matrix, self.config.dialect())?;
                tracing::info!("Exported {} rows", matrix.row_count());
                Ok(text)
            }
            None => Ok(String::new()),
        }
    }

    /// Serialize the committed matrix as JSON (array of row arrays)
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        let empty = Matrix::new();
        serde_json::to_string(self.grid.matrix().unwrap_or(&empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CellValue, NavKey};
    use crate::messages::{EditMsg, RowMsg};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unloaded_sheet() {
        let sheet = Sheet::default();
        assert!(sheet.matrix().is_none());
        assert_eq!(sheet.export_text().unwrap(), "");
        assert_eq!(sheet.export_json().unwrap(), "[]");
    }

    #[test]
    fn test_load_text_and_export() {
        let mut sheet = Sheet::default();
        sheet.load_text("a,\"b,c\"\nd,e").unwrap();
        assert_eq!(sheet.grid.shape(), (2, 2));
        assert_eq!(sheet.export_text().unwrap(), "a,\"b,c\"\nd,e");
    }

    #[test]
    fn test_listener_fires_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sheet = Sheet::with_matrix(
            Matrix::from_cells([["h1", "h2"], ["Row 1", "x"]]),
            SheetConfig::default(),
        );
        let sink = Rc::clone(&seen);
        sheet.on_change(move |m| sink.borrow_mut().push(m.row_count()));

        sheet.dispatch(RowMsg::Delete(0));
        assert!(seen.borrow().is_empty());

        sheet.dispatch(RowMsg::Add(2));
        assert_eq!(*seen.borrow(), vec![4]);
    }

    #[test]
    fn test_load_discards_pending_edit() {
        let mut sheet = Sheet::with_matrix(Matrix::from_cells([["a"]]), SheetConfig::default());
        sheet.dispatch(EditMsg::Activate { row: 0, col: 0 });
        sheet.dispatch(EditMsg::Input("changed".into()));

        sheet.load(Matrix::from_cells([["b"]]));
        assert!(!sheet.cursor.is_editing());
        assert_eq!(sheet.grid.get(0, 0).unwrap(), &CellValue::from("b"));
    }

    #[test]
    fn test_coercion_follows_config() {
        let config = SheetConfig {
            coerce_numbers: true,
            ..SheetConfig::default()
        };
        let mut sheet = Sheet::with_matrix(Matrix::from_cells([["n"], ["1"]]), config);
        sheet.dispatch(EditMsg::Activate { row: 1, col: 0 });
        sheet.dispatch(EditMsg::Input("2.5".into()));
        sheet.dispatch(EditMsg::Key(NavKey::Enter));

        assert_eq!(sheet.grid.get(1, 0).unwrap(), &CellValue::Number(2.5));
    }
}
