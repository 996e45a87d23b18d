mod config;
mod quote;

pub use config::{OrderCriterion, PollConfig, PollState, Published, TriggerReason};
pub use quote::{ParsedFeed, SymbolRecord};
