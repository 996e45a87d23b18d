use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::models::{ParsedFeed, SymbolRecord};

/// Runs of anything outside the symbol character class delimit fields.
/// CSV quoting and sign characters all fall out as delimiters, so a
/// quoted row like `"AAPL",+1.50,"+0.85%"` splits into an empty lead
/// field followed by symbol, change, percent.
static FIELD_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9.^_-]+").unwrap());

/// Field index of the symbol (index 0 is the empty lead field).
const FIELD_SYMBOL: usize = 1;
const FIELD_CHANGE: usize = 2;
const FIELD_PERCENT: usize = 3;

/// Minimum fields for a row to exist at all.
const MIN_FIELDS: usize = 4;

/// Parse raw feed text into per-symbol records.
///
/// Never fails on malformed content: rows with fewer than four fields
/// are dropped outright (not counted as errors or successes), rows
/// with unparsable numerics stay in the output marked errored with
/// zeroed values. The row whose symbol equals `title_symbol` is
/// diverted to the master slot instead of the general list; valid
/// general records feed the running sums for later averaging.
pub fn parse_feed(raw: &str, title_symbol: &str) -> ParsedFeed {
    let mut feed = ParsedFeed::default();

    for line in raw.lines() {
        let mut fields: Vec<&str> = FIELD_DELIMITER.split(line).collect();
        // A trailing delimiter run contributes no field: a quoted row
        // keeps its empty lead field but gains nothing at the end, so
        // an unquoted three-field row stays below the minimum.
        while fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.len() < MIN_FIELDS {
            debug!(line = line, "dropping short feed row");
            continue;
        }

        let symbol = fields[FIELD_SYMBOL];
        let record = match (
            fields[FIELD_CHANGE].parse::<f64>(),
            fields[FIELD_PERCENT].parse::<f64>(),
        ) {
            (Ok(change), Ok(percent)) => SymbolRecord::new(symbol, change, percent),
            _ => {
                warn!(symbol = symbol, "unparsable change/percent, marking record errored");
                SymbolRecord::errored(symbol)
            }
        };

        if record.symbol == title_symbol {
            // Master/title row: recorded separately, excluded from the averages.
            feed.master = Some(record);
        } else {
            if record.errored {
                feed.error_count += 1;
            } else {
                feed.sum_change += record.change;
                feed.sum_percent += record.percent;
            }
            feed.records.push(record);
        }
    }

    feed
}
