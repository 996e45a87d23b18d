use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::constants::CUSTOM_INDEX;
use crate::models::{OrderCriterion, PollConfig};
use crate::utils::get_feed_url;

#[derive(Parser)]
#[command(name = "quotebar")]
#[command(about = "Portfolio quote summarizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the feed once and print the published result
    Poll {
        #[command(flatten)]
        options: PollOptions,

        /// Print the published record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Poll on a periodic tick, honoring the daily throttle window
    Watch {
        #[command(flatten)]
        options: PollOptions,

        /// Seconds between ticks
        #[arg(short, long, default_value_t = 300)]
        interval: u64,
    },
    /// Normalize a symbol list and print the canonical form
    Preview {
        /// Free-form symbol list
        symbols: String,

        /// Join delimiter
        #[arg(short, long, default_value = ", ")]
        delimiter: String,

        /// Maximum number of symbols (0 = unlimited)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
    },
}

#[derive(Args)]
pub struct PollOptions {
    /// Master symbol for the status line (^MYINDEX = portfolio average)
    #[arg(short, long, default_value = CUSTOM_INDEX)]
    title: String,

    /// Free-form symbol list to poll
    #[arg(short, long)]
    symbols: String,

    /// Detail-line ordering: percent, percent_reverse, price,
    /// price_reverse (anything else keeps alphabetical order)
    #[arg(short, long)]
    order: Option<String>,

    /// URL attached to the published result's tap action
    #[arg(long)]
    click_url: Option<String>,

    /// Tap toggles detail-line reversal instead of opening a URL
    #[arg(long)]
    click_reverse: bool,

    /// Show raw price change in the detail line instead of percent
    #[arg(long)]
    show_price: bool,

    /// Suppress output entirely on Saturday/Sunday
    #[arg(long)]
    hide_on_weekends: bool,

    /// Quote feed endpoint override
    #[arg(long)]
    feed_url: Option<String>,
}

impl PollOptions {
    fn into_config(self) -> PollConfig {
        PollConfig {
            title_symbol: self.title.to_uppercase(),
            symbol_list: self.symbols,
            order: self.order.as_deref().and_then(OrderCriterion::from_setting),
            click_url: self.click_url,
            click_reverse: self.click_reverse,
            show_price: self.show_price,
            hide_on_weekends: self.hide_on_weekends,
            feed_url: self.feed_url.unwrap_or_else(get_feed_url),
        }
    }
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Poll { options, json } => {
            commands::poll::run(options.into_config(), json);
        }
        Commands::Watch { options, interval } => {
            commands::watch::run(options.into_config(), interval);
        }
        Commands::Preview {
            symbols,
            delimiter,
            limit,
        } => {
            commands::preview::run(&symbols, &delimiter, limit);
        }
    }
}
