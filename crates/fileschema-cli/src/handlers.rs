//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod describe;
mod read;

pub use check::handle_check;
pub use describe::handle_describe;
