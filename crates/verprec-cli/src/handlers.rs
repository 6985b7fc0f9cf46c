//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod compare;
mod completions;
mod config;
mod parse;

pub use check::handle_check;
pub use compare::handle_compare;
pub use completions::handle_completions;
pub use config::handle_config;
pub use parse::handle_parse;
