//! CSV codec
//!
//! Converts between delimited text and a [`Matrix`](crate::grid::Matrix).
//!
//! Two quoting dialects are supported:
//!
//! - [`QuoteMode::Lenient`] (default): a `"` toggles quoting and is dropped,
//!   fields containing the delimiter are wrapped in one layer of quotes on
//!   output. Embedded quote characters are not escaped, so a cell holding a
//!   raw `"` does not survive a round trip. Blank lines are skipped on
//!   input, so a row that serializes to an empty or whitespace-only line
//!   is lost: an empty row of a one-column matrix (as `insert_row` below
//!   the header builds), or a row of empty cells under the tab delimiter.
//! - [`QuoteMode::Strict`]: RFC 4180 via the `csv` crate, with doubled-quote
//!   escaping.

mod dialect;
mod parser;
mod writer;

pub use dialect::{Delimiter, Dialect, QuoteMode};
pub use parser::{decode, decode_with, detect_delimiter, parse, parse_with, CodecError};
pub use writer::{serialize, serialize_with};
