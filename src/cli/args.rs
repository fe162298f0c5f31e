//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ArtCharset;
use crate::api::CHANNEL_COUNT;

/// Parse and validate a channel number (1 or 2)
fn parse_channel(s: &str) -> Result<u8, String> {
    let channel: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid channel number", s))?;
    if !(1..=CHANNEL_COUNT).contains(&channel) {
        return Err(format!(
            "Channel must be between 1 and {}, got {}",
            CHANNEL_COUNT, channel
        ));
    }
    Ok(channel)
}

/// Parse and validate an art dimension (1-400 characters)
fn parse_art_size(s: &str) -> Result<u16, String> {
    let size: u16 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", s))?;
    if !(1..=400).contains(&size) {
        return Err(format!(
            "Art size must be between 1 and 400 characters, got {}",
            size
        ));
    }
    Ok(size)
}

/// nts: NTS Radio in your terminal
#[derive(Parser, Debug)]
#[command(name = "nts")]
#[command(version, about = "NTS Radio in your terminal", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "EXAMPLES:
    # What is on air right now
    nts now

    # Include the show artwork as terminal art
    nts now --art --art-width 40 --art-height 20

    # Full schedule for both channels
    nts schedule

    # Listen to channel 2
    nts play 2

    # Play a random Infinite Mixtape
    nts infinite --random")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Display currently playing shows on NTS
    Now {
        /// Show ASCII art for the current shows
        #[arg(long)]
        art: bool,

        /// Width of the show art in characters [default: 80]
        #[arg(long, value_parser = parse_art_size)]
        art_width: Option<u16>,

        /// Height of the show art in characters [default: 40]
        #[arg(long, value_parser = parse_art_size)]
        art_height: Option<u16>,

        /// Character set for the show art [default: pixels]
        #[arg(long)]
        charset: Option<ArtCharset>,
    },

    /// Display full schedule for both channels
    Schedule,

    /// Output raw JSON data from the NTS API
    Json,

    /// Show details about what is on air
    Info {
        /// Only show this channel
        #[arg(long, short = 'n', value_parser = parse_channel)]
        channel: Option<u8>,
    },

    /// Print the stream URL for a channel
    StreamUrl {
        /// Channel number (1 or 2)
        #[arg(value_parser = parse_channel)]
        channel: u8,
    },

    /// Play a channel in the media player
    Play {
        /// Channel number (1 or 2)
        #[arg(value_parser = parse_channel)]
        channel: u8,
    },

    /// List or play NTS Infinite Mixtapes
    #[command(after_help = "EXAMPLES:
    nts infinite                 # List mixtapes
    nts infinite --url           # List mixtapes with stream URLs
    nts infinite --play poolside # Play a mixtape by alias
    nts infinite --random        # Play a random mixtape
    nts infinite --random --url  # Print a random mixtape's stream URL")]
    Infinite {
        /// Print stream URLs instead of playing
        #[arg(long)]
        url: bool,

        /// Play the mixtape with this alias
        #[arg(long, value_name = "ALIAS", conflicts_with = "random")]
        play: Option<String>,

        /// Pick a random mixtape
        #[arg(long)]
        random: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Exit status after a failed parse. Help and version output are not errors;
/// everything else exits 1 like any other failure.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
