//! One poll, end to end: gating, trigger handling, fetch, parse,
//! aggregate, rank, format, throttle update. The stages compose
//! linearly; only the fetch can fail the run.

use tracing::{debug, info};

use crate::constants::CUSTOM_INDEX;
use crate::error::{Error, Result};
use crate::models::{PollConfig, PollState, Published, TriggerReason};
use crate::services::feed::FeedClient;
use crate::services::scheduler::{self, Gate, PollWindow};
use crate::services::{aggregator, formatter, normalizer, parser, ranker};

/// Outcome of one pipeline invocation.
#[derive(Debug, PartialEq)]
pub enum PollOutcome {
    /// Fresh output to publish
    Published(Published),
    /// Throttled: the previously published output remains valid
    Unchanged,
}

/// Gating decision for one invocation at a given reference epoch.
#[derive(Debug, PartialEq)]
enum Decision {
    /// Weekend suppression: hidden output, carrying the untouched state
    Hidden(PollState),
    /// Inside the throttle window, trigger already applied
    Throttled(PollState),
    /// Poll now, trigger already applied
    Poll(PollState),
}

/// Order matters here: the weekend gate runs on the untouched state
/// before trigger handling, so a manual tap on a suppressed weekend
/// mutates nothing; the throttle gate then runs on the trigger-applied
/// state, so a forced refresh always passes it.
fn decide(config: &PollConfig, state: PollState, reason: TriggerReason, now: i64) -> Decision {
    if scheduler::gate(state, now, config.hide_on_weekends) == Gate::HiddenWeekend {
        return Decision::Hidden(state);
    }

    let state = scheduler::apply_trigger(state, reason, config.click_reverse);
    if scheduler::gate(state, now, config.hide_on_weekends) == Gate::Throttled {
        return Decision::Throttled(state);
    }
    Decision::Poll(state)
}

/// Run one poll and return the outcome alongside the scheduling state.
///
/// The state comes back on every path. Fetch-level failure pairs the
/// error with the trigger-applied state: a forced refresh stays forced
/// for the retry and the throttle never advances, so the next tick
/// tries again. Per-symbol faults never surface here; the parser
/// downgrades them to errored records.
pub async fn run_poll(
    config: &PollConfig,
    state: PollState,
    reason: TriggerReason,
    client: &FeedClient,
) -> (Result<PollOutcome>, PollState) {
    let window = PollWindow::default();
    let now = scheduler::reference_epoch(chrono::Utc::now().timestamp(), &window);

    let state = match decide(config, state, reason, now) {
        Decision::Hidden(untouched) => {
            info!("weekend suppression active, publishing hidden output");
            return (Ok(PollOutcome::Published(Published::hidden())), untouched);
        }
        Decision::Throttled(next) => {
            debug!(
                next_allowed_epoch = next.next_allowed_epoch,
                "throttled, reusing previous output"
            );
            return (Ok(PollOutcome::Unchanged), next);
        }
        Decision::Poll(next) => next,
    };

    let query = match build_query(config) {
        Ok(query) => query,
        Err(e) => return (Err(e), state),
    };
    let raw = match client.fetch_quotes(&query).await {
        Ok(raw) => raw,
        Err(e) => return (Err(e), state),
    };

    let published = render_feed(&raw, config, state.reverse_mode);
    let state = scheduler::after_success(state, now, &window);
    (Ok(PollOutcome::Published(published)), state)
}

/// Build the feed query: title symbol prepended so the master rides in
/// the same request, then normalized. A pseudo-symbol title
/// contributes nothing (the normalizer rejects it).
fn build_query(config: &PollConfig) -> Result<String> {
    if config.title_symbol.is_empty() {
        return Err(Error::Config("No title symbol configured".to_string()));
    }

    let query = normalizer::normalize_symbols(
        &format!("{},{}", config.title_symbol, config.symbol_list),
        ",",
        0,
    );
    if query.is_empty() {
        return Err(Error::Config(
            "Symbol list normalized to nothing".to_string(),
        ));
    }
    Ok(query)
}

/// Pure tail of the pipeline: parse raw feed text and render the
/// published record. Split out from `run_poll` so the whole
/// parse-aggregate-rank-format path runs without a network.
pub fn render_feed(raw: &str, config: &PollConfig, reverse_mode: bool) -> Published {
    let mut feed = parser::parse_feed(raw, &config.title_symbol);

    // Click-reverse takes over the tap gesture, suppressing the URL.
    let tap_action = if config.click_reverse {
        None
    } else {
        config.click_url.clone().filter(|url| !url.is_empty())
    };
    let mut published = Published::no_data(tap_action);

    // Body and portfolio average need at least one valid general
    // record; a master parsed from a real ticker row renders below
    // regardless.
    if feed.valid_count() > 0 {
        if config.title_symbol == CUSTOM_INDEX {
            feed.master = Some(aggregator::portfolio_average(&feed));
        }
        ranker::rank_records(&mut feed.records, config.order, reverse_mode);
        published.expanded_body = formatter::format_body(&feed.records, config.show_price);
    }

    if let Some(master) = &feed.master {
        let (status, title) = formatter::format_master(master);
        published.status_text = status;
        published.expanded_title = title;
    }

    published
}
