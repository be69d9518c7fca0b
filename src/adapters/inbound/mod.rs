//! Inbound adapters - entry points that drive the application.

pub mod cli;

pub use cli::{Cli, Outcome, HELP};
