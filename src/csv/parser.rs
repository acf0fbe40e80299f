//! CSV parsing
//!
//! The lenient parser is a single left-to-right scan per line. Strict
//! parsing goes through the csv crate for RFC 4180 compliance.

use super::dialect::{Delimiter, Dialect, QuoteMode};
use crate::grid::{CellValue, Matrix, Row};

/// Error type for the CSV codec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Input bytes are not decodable text
    #[error("input is not valid UTF-8 (at byte {offset})")]
    Malformed { offset: usize },
    /// Strict reader rejected a record
    #[error("CSV parse error at line {line}: {message}")]
    Csv { line: usize, message: String },
    /// Strict writer failed
    #[error("CSV write error: {0}")]
    Write(String),
}

/// Parse comma-separated text with the lenient dialect
///
/// Lines are split on `\n` or `\r\n`; blank lines are dropped. Ragged rows
/// are returned as-is.
pub fn parse(text: &str) -> Matrix {
    parse_lenient(text, Delimiter::Comma)
}

/// Parse text with an explicit dialect
pub fn parse_with(text: &str, dialect: Dialect) -> Result<Matrix, CodecError> {
    match dialect.quoting {
        QuoteMode::Lenient => Ok(parse_lenient(text, dialect.delimiter)),
        QuoteMode::Strict => parse_strict(text, dialect.delimiter),
    }
}

/// Decode raw bytes and parse them with the lenient comma dialect
pub fn decode(bytes: &[u8]) -> Result<Matrix, CodecError> {
    decode_with(bytes, Dialect::default())
}

/// Decode raw bytes and parse them with an explicit dialect
pub fn decode_with(bytes: &[u8], dialect: Dialect) -> Result<Matrix, CodecError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        tracing::error!("Rejecting undecodable input: {}", e);
        CodecError::Malformed {
            offset: e.valid_up_to(),
        }
    })?;
    parse_with(text, dialect)
}

fn parse_lenient(text: &str, delimiter: Delimiter) -> Matrix {
    let delim = delimiter.char();
    let rows = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, delim))
        .collect();
    Matrix::from_rows(rows)
}

fn parse_line(line: &str, delim: char) -> Row {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delim && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| CellValue::Text(strip_wrapping_quotes(field)))
        .collect()
}

/// Remove one layer of wrapping double quotes
fn strip_wrapping_quotes(field: String) -> String {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].to_string()
    } else {
        field
    }
}

fn parse_strict(text: &str, delimiter: Delimiter) -> Result<Matrix, CodecError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Row> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(CellValue::from).collect());
            }
            Err(e) => {
                tracing::error!("Failed to parse CSV: {}", e);
                return Err(CodecError::Csv {
                    line: line_num + 1,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(Matrix::from_rows(rows))
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 || comma_count == max {
        Delimiter::Comma
    } else if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else {
        Delimiter::Semicolon
    }
}
