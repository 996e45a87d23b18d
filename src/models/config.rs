use serde::{Deserialize, Serialize};

use crate::constants::CUSTOM_INDEX;
use crate::utils::get_feed_url;

/// Detail-line ordering criterion (closed set, resolved once before
/// sorting instead of string-matching inside the comparator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderCriterion {
    /// Percent change, descending
    Percent,
    /// Percent change, ascending
    PercentReverse,
    /// Price change, descending
    Price,
    /// Price change, ascending
    PriceReverse,
}

impl OrderCriterion {
    /// Parse the stored settings value. Anything unrecognized
    /// (including empty) means "keep alphabetical order".
    pub fn from_setting(s: &str) -> Option<Self> {
        match s {
            "percent" => Some(OrderCriterion::Percent),
            "percent_reverse" => Some(OrderCriterion::PercentReverse),
            "price" => Some(OrderCriterion::Price),
            "price_reverse" => Some(OrderCriterion::PriceReverse),
            _ => None,
        }
    }
}

/// Why the pipeline was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerReason {
    /// User asked for a refresh
    Manual,
    /// Configuration changed since the last run
    SettingsChanged,
    /// Host's periodic tick
    Periodic,
}

/// Immutable per-run configuration, every option explicit. Missing
/// fields deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Master symbol for the status line; the pseudo-symbol selects
    /// portfolio-average mode
    pub title_symbol: String,

    /// Raw, free-form symbol list (normalized before querying)
    pub symbol_list: String,

    /// Detail-line ordering; None keeps alphabetical order
    pub order: Option<OrderCriterion>,

    /// URL attached to the published result's tap action
    pub click_url: Option<String>,

    /// Tap toggles detail-line reversal instead of opening a URL
    pub click_reverse: bool,

    /// Show raw price change in the detail line instead of percent
    pub show_price: bool,

    /// Suppress output entirely on Saturday/Sunday
    pub hide_on_weekends: bool,

    /// Quote feed endpoint
    pub feed_url: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            title_symbol: CUSTOM_INDEX.to_string(),
            symbol_list: String::new(),
            order: None,
            click_url: None,
            click_reverse: false,
            show_price: false,
            hide_on_weekends: false,
            feed_url: get_feed_url(),
        }
    }
}

/// Scheduling state, threaded value-in/value-out through the pipeline
/// so the scheduler is testable in isolation. Owned by a single
/// polling instance; never shared across concurrent polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollState {
    /// Earliest reference-adjusted epoch the next periodic poll may
    /// run; 0 means always due
    pub next_allowed_epoch: i64,

    /// Detail-line reversal toggle, flipped by manual triggers while
    /// click-reverse is enabled
    pub reverse_mode: bool,
}

/// Result published to the host display surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Published {
    pub visible: bool,
    pub status_text: String,
    pub expanded_title: String,
    pub expanded_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<String>,
}

impl Published {
    /// Weekend suppression output: nothing shown, nothing retained.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            status_text: String::new(),
            expanded_title: String::new(),
            expanded_body: String::new(),
            tap_action: None,
        }
    }

    /// Visible defaults before any feed data is filled in.
    pub fn no_data(tap_action: Option<String>) -> Self {
        Self {
            visible: true,
            status_text: "[No Data]".to_string(),
            expanded_title: "[No data available]".to_string(),
            expanded_body: String::new(),
            tap_action,
        }
    }
}
