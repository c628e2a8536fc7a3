//! CLI module
//!
//! Command-line interface over the pagination controller.
//!
//! # Commands
//!
//! - `query` - Load one or more pages for a user and print them
//! - `browse` - Interactive "load more" loop
//! - `config` - Show or update the endpoint configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
