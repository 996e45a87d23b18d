use crate::error::{Error, Result};
use crate::models::{PollConfig, PollState, Published, TriggerReason};
use crate::services::{run_poll, FeedClient, PollOutcome};

pub fn run(config: PollConfig, json: bool) {
    match poll_once(config, json) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Poll failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn poll_once(config: PollConfig, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = FeedClient::new(config.feed_url.clone())?;

        // One-shot invocations are always a manual trigger.
        let (outcome, _state) =
            run_poll(&config, PollState::default(), TriggerReason::Manual, &client).await;

        match outcome? {
            PollOutcome::Published(published) => print_published(&published, json),
            PollOutcome::Unchanged => {
                println!("(throttled, previous output still valid)");
                Ok(())
            }
        }
    })
}

fn print_published(published: &Published, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(published)
            .map_err(|e| Error::Other(format!("Failed to encode result: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if !published.visible {
        println!("(hidden)");
        return Ok(());
    }

    println!("{}", published.status_text);
    println!("{}", published.expanded_title);
    if !published.expanded_body.is_empty() {
        println!("{}", published.expanded_body);
    }
    if let Some(url) = &published.tap_action {
        println!("tap: {}", url);
    }
    Ok(())
}
