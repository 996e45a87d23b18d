use tracing::warn;

use crate::constants::CUSTOM_INDEX;
use crate::models::{ParsedFeed, SymbolRecord};

/// Synthesize the portfolio-average pseudo-record from the parser's
/// running sums. With no valid records, or a non-finite mean, the
/// record is marked errored rather than omitted so the status line
/// still shows something.
///
/// Only called when the configured title symbol is the pseudo-symbol;
/// a real ticker title uses the parsed master record directly.
pub fn portfolio_average(feed: &ParsedFeed) -> SymbolRecord {
    let valid = feed.valid_count();
    if valid == 0 {
        return SymbolRecord::errored(CUSTOM_INDEX);
    }

    let change = feed.sum_change / valid as f64;
    let percent = feed.sum_percent / valid as f64;
    if !change.is_finite() || !percent.is_finite() {
        warn!(valid = valid, "portfolio average not finite, marking errored");
        return SymbolRecord::errored(CUSTOM_INDEX);
    }

    SymbolRecord::new(CUSTOM_INDEX, change, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with(percents: &[f64]) -> ParsedFeed {
        let mut feed = ParsedFeed::default();
        for (i, &percent) in percents.iter().enumerate() {
            feed.records
                .push(SymbolRecord::new(format!("SYM{}", i), percent, percent));
            feed.sum_change += percent;
            feed.sum_percent += percent;
        }
        feed
    }

    #[test]
    fn test_average_not_rounded_at_computation() {
        let feed = feed_with(&[1.0, -2.0, 3.0]);
        let average = portfolio_average(&feed);

        assert_eq!(average.symbol, CUSTOM_INDEX);
        assert!(!average.errored);
        assert!((average.percent - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_valid_records_yields_errored_average() {
        let mut feed = ParsedFeed::default();
        feed.records.push(SymbolRecord::errored("AAPL"));
        feed.error_count = 1;

        let average = portfolio_average(&feed);
        assert!(average.errored);
        assert_eq!(average.change, 0.0);
        assert_eq!(average.percent, 0.0);
    }

    #[test]
    fn test_non_finite_sum_yields_errored_average() {
        let mut feed = feed_with(&[1.0]);
        feed.sum_percent = f64::NAN;

        assert!(portfolio_average(&feed).errored);
    }
}
