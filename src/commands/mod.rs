pub mod poll;
pub mod preview;
pub mod watch;
