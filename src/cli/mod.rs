//! Command-line interface for todoql.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, EnvironmentArg};
