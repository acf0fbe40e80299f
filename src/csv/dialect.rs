//! Delimiter and quoting settings

use serde::{Deserialize, Serialize};

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        Self::for_extension(ext).unwrap_or_default()
    }

    /// Delimiter implied by a known extension, `None` for anything else
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Delimiter::Comma),
            "tsv" => Some(Delimiter::Tab),
            "psv" => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" => Ok(Delimiter::Tab),
            "pipe" | "|" => Ok(Delimiter::Pipe),
            "semicolon" | ";" => Ok(Delimiter::Semicolon),
            other => Err(format!("unknown delimiter '{}'", other)),
        }
    }
}

/// How quote characters are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    /// Single layer of wrapping quotes, no escaping
    #[default]
    Lenient,
    /// RFC 4180 quoting with `""` escapes
    Strict,
}

/// Delimiter plus quoting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialect {
    pub delimiter: Delimiter,
    pub quoting: QuoteMode,
}

impl Dialect {
    pub fn new(delimiter: Delimiter, quoting: QuoteMode) -> Self {
        Self {
            delimiter,
            quoting,
        }
    }

    /// Comma-separated, RFC 4180 quoting
    pub fn strict() -> Self {
        Self::new(Delimiter::Comma, QuoteMode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_extension("csv"), Delimiter::Comma);
        assert_eq!(Delimiter::from_extension("CSV"), Delimiter::Comma);
        assert_eq!(Delimiter::from_extension("tsv"), Delimiter::Tab);
        assert_eq!(Delimiter::from_extension("psv"), Delimiter::Pipe);
        assert_eq!(Delimiter::from_extension("txt"), Delimiter::Comma);
    }

    #[test]
    fn test_unknown_extension_has_no_delimiter() {
        assert_eq!(Delimiter::for_extension("TSV"), Some(Delimiter::Tab));
        assert_eq!(Delimiter::for_extension("txt"), None);
        assert_eq!(Delimiter::for_extension(""), None);
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("tab".parse::<Delimiter>(), Ok(Delimiter::Tab));
        assert_eq!(";".parse::<Delimiter>(), Ok(Delimiter::Semicolon));
        assert!("colon".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_default_dialect_is_lenient_comma() {
        let dialect = Dialect::default();
        assert_eq!(dialect.delimiter, Delimiter::Comma);
        assert_eq!(dialect.quoting, QuoteMode::Lenient);
    }
}
