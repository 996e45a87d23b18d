//! Feed and scheduling constants.
//!
//! The polling window is expressed in a fixed reference timezone (EST,
//! no DST adjustment) so throttle arithmetic stays plain integer math
//! on shifted epochs.

/// Reserved pseudo-symbol for the computed portfolio average.
/// Never a real feed query target; the normalizer strips it from
/// every symbol list.
pub const CUSTOM_INDEX: &str = "^MYINDEX";

/// Reference timezone offset in seconds (-18000 = EST).
pub const DEFAULT_TIMEZONE_OFFSET_SECS: i64 = -18_000;

/// Start of the daily polling window, 24h format (reference timezone).
/// Sits an hour before the NYSE open to absorb the DST drift the
/// fixed offset ignores.
pub const START_POLLING_HOUR: i64 = 8;

/// End of the daily polling window, 24h format (reference timezone).
pub const STOP_POLLING_HOUR: i64 = 17;

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default quote feed endpoint. Override with the QUOTEBAR_FEED_URL
/// environment variable or the --feed-url flag.
pub const DEFAULT_FEED_URL: &str = "http://download.finance.yahoo.com/d/quotes.csv";

/// Feed format parameter: symbol, change, percent change.
pub const FEED_FORMAT: &str = "sc6p2";

/// Symbol -> short display name for the master/status line.
/// Unknown symbols fall back to the raw symbol string.
pub const SHORT_NAMES: &[(&str, &str)] = &[
    (CUSTOM_INDEX, "Portfolio"),
    ("^GSPC", "S&P 500"),
    ("^DJI", "Dow"),
    ("^IXIC", "Nasdaq"),
    ("^RUT", "Russell 2K"),
    ("^NYA", "NYSE"),
    ("^FTSE", "FTSE 100"),
    ("^N225", "Nikkei"),
];
