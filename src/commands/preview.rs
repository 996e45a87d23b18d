use crate::services::normalize_symbols;

/// Print the canonical form of a free-form symbol list, the same
/// normalization the poll query uses.
pub fn run(symbols: &str, delimiter: &str, limit: usize) {
    println!("{}", normalize_symbols(symbols, delimiter, limit));
}
