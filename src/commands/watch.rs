use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{PollConfig, PollState, TriggerReason};
use crate::services::{run_poll, FeedClient, PollOutcome};

pub fn run(config: PollConfig, interval_secs: u64) {
    match watch(config, interval_secs) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Watch failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn watch(config: PollConfig, interval_secs: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(watch_loop(config, interval_secs))
}

async fn watch_loop(config: PollConfig, interval_secs: u64) -> Result<()> {
    let client = FeedClient::new(config.feed_url.clone())?;
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    let mut state = PollState::default();
    // Configuration was just loaded, so the first tick behaves like a
    // settings change; everything after is the periodic cadence.
    let mut reason = TriggerReason::SettingsChanged;

    loop {
        ticker.tick().await;

        let (outcome, next_state) = run_poll(&config, state, reason, &client).await;
        state = next_state;

        match outcome {
            Ok(PollOutcome::Published(published)) => {
                if published.visible {
                    println!("{} | {}", published.expanded_title, published.expanded_body);
                } else {
                    println!("(hidden)");
                }
            }
            Ok(PollOutcome::Unchanged) => {}
            Err(e) => {
                // Trigger effects survive in the returned state; the
                // throttle never advanced, so the next tick retries.
                eprintln!("⚠️  Poll failed, will retry: {}", e);
            }
        }

        reason = TriggerReason::Periodic;
    }
}
