pub mod aggregator;
pub mod feed;
pub mod formatter;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod scheduler;

pub use feed::FeedClient;
pub use normalizer::normalize_symbols;
pub use pipeline::{run_poll, PollOutcome};
pub use scheduler::{Gate, PollWindow};
