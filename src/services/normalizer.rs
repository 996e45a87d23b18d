use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::CUSTOM_INDEX;

/// Maximal runs of symbol characters in an uppercased input.
static SYMBOL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z0-9.^_-]+").unwrap());

/// Canonicalize a free-form symbol list.
///
/// Uppercases the input, extracts symbol-character runs, deduplicates
/// in encounter order, drops the portfolio pseudo-symbol, stops once
/// `limit` symbols were collected (0 = unlimited), then sorts and
/// joins with `delimiter`. Idempotent and deterministic; an input with
/// no usable symbols yields "". Used both for the feed query string
/// and for live preview of an edited symbol list.
pub fn normalize_symbols(input: &str, delimiter: &str, limit: usize) -> String {
    let upper = input.to_uppercase();
    let mut symbols: Vec<&str> = Vec::new();

    for found in SYMBOL_RUN.find_iter(&upper) {
        let symbol = found.as_str();

        // The pseudo-symbol is never a real quote target.
        if symbol == CUSTOM_INDEX || symbols.contains(&symbol) {
            continue;
        }
        symbols.push(symbol);

        if limit > 0 && symbols.len() >= limit {
            break;
        }
    }

    symbols.sort_unstable();
    symbols.join(delimiter)
}
