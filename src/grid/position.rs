//! Cell addressing

use std::fmt;
use std::str::FromStr;

/// Position of a cell in the grid (zero-based, row 0 is the header)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Spreadsheet-style reference: column letters plus 1-based row number
    pub fn to_reference(self) -> String {
        format!("{}{}", column_label(self.col), self.row + 1)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_reference())
    }
}

/// Column label for a zero-based index (A, B, ..., Z, AA, AB, ...)
pub fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index;
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

/// Error for malformed cell references such as `3B` or `A0`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell reference '{0}'")]
pub struct ParsePositionError(pub String);

impl FromStr for CellPosition {
    type Err = ParsePositionError;

    /// Parse references like `B3` (column B, row number 3 => row index 2)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let s_upper = s.trim().to_ascii_uppercase();

        let split = s_upper
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(err)?;
        let (letters, digits) = s_upper.split_at(split);

        if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(err());
        }

        let mut col: usize = 0;
        for b in letters.bytes() {
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add((b - b'A') as usize + 1))
                .ok_or_else(err)?;
        }

        let row: usize = digits.parse().map_err(|_| err())?;
        if row == 0 {
            return Err(err());
        }

        Ok(CellPosition::new(row - 1, col - 1))
    }
}
