//! CLI Adapter
//!
//! clap command definitions and table rendering for the pairscope binary.

mod commands;

pub use commands::{render_table, CliApp, Command, IconsCmd, TopCmd};
