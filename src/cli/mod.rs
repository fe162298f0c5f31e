//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, the resolved command
//! context and subcommand handlers.

mod args;
mod commands;
mod context;
mod enums;

pub use args::{parse_exit_code, Args, Command, ConfigAction};
pub use commands::{
    find_mixtape, info, infinite, init_config, json, now, print_stream_url, run, schedule,
    show_config, CommandError, STACK_WIDTH,
};
pub use context::{terminal_width, Context, StatusLine, DEFAULT_TERMINAL_WIDTH, FETCHING_MESSAGE};
pub use enums::ArtCharset;
