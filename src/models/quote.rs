use serde::{Deserialize, Serialize};

/// One symbol's quote for the current poll.
///
/// When `errored` is set the numeric fields are zeroed and must never
/// be rendered as values; the formatter shows `ERR` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Canonical uppercase ticker, or the portfolio pseudo-symbol
    pub symbol: String,

    /// Absolute price change since previous close
    pub change: f64,

    /// Percent change since previous close
    pub percent: f64,

    /// Numeric fields failed to parse for this row
    pub errored: bool,
}

impl SymbolRecord {
    pub fn new(symbol: impl Into<String>, change: f64, percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            change,
            percent,
            errored: false,
        }
    }

    /// A record whose numeric fields could not be produced.
    pub fn errored(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            change: 0.0,
            percent: 0.0,
            errored: true,
        }
    }
}

/// Parser output for one poll.
///
/// The master slot holds the row matching the configured title symbol;
/// everything else lands in `records`. Running sums cover only the
/// non-errored general records so the portfolio average is not
/// polluted by zeroed error rows.
#[derive(Debug, Default)]
pub struct ParsedFeed {
    /// General records in feed order
    pub records: Vec<SymbolRecord>,

    /// Row diverted because its symbol equals the title symbol
    pub master: Option<SymbolRecord>,

    /// Errored general records (excluded from the sums)
    pub error_count: usize,

    /// Sum of `change` over valid general records
    pub sum_change: f64,

    /// Sum of `percent` over valid general records
    pub sum_percent: f64,
}

impl ParsedFeed {
    /// Number of non-errored general records.
    pub fn valid_count(&self) -> usize {
        self.records.len() - self.error_count
    }
}
