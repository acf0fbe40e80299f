//! Command-line argument parsing for the sheetgrid host
//!
//! Supports:
//! - Loading a CSV file or generating placeholder data
//! - Applying a sequence of row/cell operations
//! - Exporting as CSV (lenient or strict) or JSON

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use sheetgrid::csv::{Delimiter, QuoteMode};
use sheetgrid::grid::CellPosition;
use sheetgrid::messages::RowMsg;
use sheetgrid::{CellValue, SheetConfig};

/// Edit CSV files as a grid from the command line
#[derive(Parser, Debug)]
#[command(name = "sheetgrid", version, about = "Edit CSV files as a grid")]
pub struct CliArgs {
    /// CSV file to load
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Generate placeholder data instead of reading a file
    #[arg(long, conflicts_with = "input")]
    pub placeholder: bool,

    /// Operation to apply, in order (set:B2=text, insert:N, delete:N, up:N,
    /// down:N, add:N, trim:N, dup). Row numbers are 1-based as displayed.
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<RowAction>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the matrix as JSON instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Use RFC 4180 quoting for import and export
    #[arg(long)]
    pub strict: bool,

    /// Field delimiter (comma, tab, pipe, semicolon)
    #[arg(long, value_name = "DELIM")]
    pub delimiter: Option<Delimiter>,

    /// Persist the effective dialect settings to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// A row or cell action given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction(pub RowMsg);

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let row_number = |arg: Option<&str>| -> Result<usize, String> {
            let n: usize = arg
                .ok_or_else(|| format!("'{}' needs a row number", name))?
                .parse()
                .map_err(|_| format!("invalid row number in '{}'", s))?;
            n.checked_sub(1)
                .ok_or_else(|| format!("row numbers start at 1 in '{}'", s))
        };
        let count = |arg: Option<&str>| -> Result<usize, String> {
            arg.ok_or_else(|| format!("'{}' needs a count", name))?
                .parse()
                .map_err(|_| format!("invalid count in '{}'", s))
        };

        let msg = match name {
            "set" => {
                let (cell, value) = arg
                    .and_then(|a| a.split_once('='))
                    .ok_or_else(|| format!("expected set:CELL=VALUE, got '{}'", s))?;
                let pos: CellPosition = cell.parse().map_err(|e| format!("{}", e))?;
                RowMsg::SetCell {
                    row: pos.row,
                    col: pos.col,
                    value: CellValue::from(value),
                }
            }
            "insert" => RowMsg::InsertBelow(row_number(arg)?),
            "delete" => RowMsg::Delete(row_number(arg)?),
            "up" => RowMsg::MoveUp(row_number(arg)?),
            "down" => RowMsg::MoveDown(row_number(arg)?),
            "add" => RowMsg::Add(count(arg)?),
            "trim" => RowMsg::DeleteLast(count(arg)?),
            "dup" => RowMsg::DuplicateLast,
            other => return Err(format!("unknown operation '{}'", other)),
        };

        Ok(RowAction(msg))
    }
}

/// Where the initial matrix comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Placeholder,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: Source,
    pub ops: Vec<RowMsg>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub sheet: SheetConfig,
    /// Pick the delimiter from the file content once it is read
    pub detect_delimiter: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Combine parsed CLI args with the persisted config
    pub fn into_config(self, mut sheet: SheetConfig) -> Result<RunConfig, String> {
        let source = match (self.input, self.placeholder) {
            (Some(path), false) => Source::File(path),
            (None, true) => Source::Placeholder,
            (None, false) => return Err("No input file given (use --placeholder for sample data)".to_string()),
            (Some(_), true) => return Err("Cannot combine an input file with --placeholder".to_string()),
        };

        if self.strict {
            sheet.quoting = QuoteMode::Strict;
        }
        let mut detect_delimiter = false;
        if let Some(delimiter) = self.delimiter {
            sheet.delimiter = delimiter;
        } else if let Source::File(path) = &source {
            match path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(Delimiter::for_extension)
            {
                Some(delimiter) => sheet.delimiter = delimiter,
                None => detect_delimiter = true,
            }
        }

        Ok(RunConfig {
            source,
            ops: self.ops.into_iter().map(|a| a.0).collect(),
            output: self.output,
            json: self.json,
            sheet,
            detect_delimiter,
            save_config: self.save_config,
        })
    }
}
