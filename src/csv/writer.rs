//! CSV serialization

use super::dialect::{Delimiter, Dialect, QuoteMode};
use super::parser::CodecError;
use crate::grid::Matrix;

/// Serialize with the lenient comma dialect
///
/// Cells containing a comma are wrapped in double quotes; embedded quotes
/// are written as-is. Rows are joined with `\n` and there is no trailing
/// newline.
pub fn serialize(matrix: &Matrix) -> String {
    serialize_lenient(matrix, Delimiter::Comma)
}

/// Serialize with an explicit dialect
pub fn serialize_with(matrix: &Matrix, dialect: Dialect) -> Result<String, CodecError> {
    match dialect.quoting {
        QuoteMode::Lenient => Ok(serialize_lenient(matrix, dialect.delimiter)),
        QuoteMode::Strict => serialize_strict(matrix, dialect.delimiter),
    }
}

fn serialize_lenient(matrix: &Matrix, delimiter: Delimiter) -> String {
    let delim = delimiter.char();
    let mut separator = [0u8; 4];
    let separator: &str = delim.encode_utf8(&mut separator);

    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let text = cell.to_string();
                    if text.contains(delim) {
                        format!("\"{}\"", text)
                    } else {
                        text
                    }
                })
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize_strict(matrix: &Matrix, delimiter: Delimiter) -> Result<String, CodecError> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(delimiter.char() as u8)
        .terminator(::csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in matrix.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| CodecError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Write(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| CodecError::Write(e.to_string()))?;

    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
