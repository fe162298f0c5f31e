//! Subcommand handlers.
//!
//! Every handler writes to the given writer so output can be captured; only
//! playback talks to the terminal directly.

use std::io::Write;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Widget;

use super::args::{Command, ConfigAction};
use super::context::Context;
use crate::api::{stream_url, ApiError, Mixtape};
use crate::artwork::{art_panel, fetch_art};
use crate::ascii::ArtOptions;
use crate::config::{ConfigError, DEFAULT_CONFIG};
use crate::format::{
    buffer_lines, channel_panel, mixtape_lines, render_to_buffer, schedule_table, show_info,
    to_cells, wrap_text, InvalidTimeFormat, Panel, Theme,
};
use crate::player::{self, PlayerError};

/// Below this many columns channel panels are stacked instead of side by side.
pub const STACK_WIDTH: usize = 80;

/// Errors reported by a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidTime(#[from] InvalidTimeFormat),

    #[error("Channel {0} is not in the NTS response")]
    NoChannel(u8),

    #[error("No mixtape named '{0}'. Run 'nts infinite' to list them.")]
    UnknownMixtape(String),

    #[error("NTS returned no mixtapes")]
    NoMixtapes,

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to write config file '{}': {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run `command` against `ctx`, writing its output to `out`.
pub async fn run(ctx: &Context, command: Command, out: &mut impl Write) -> Result<(), CommandError> {
    match command {
        Command::Now {
            art,
            art_width,
            art_height,
            charset,
        } => {
            let art = art.then(|| ctx.art_options(art_width, art_height, charset));
            now(ctx, art, out).await
        }
        Command::Schedule => schedule(ctx, out).await,
        Command::Json => json(ctx, out).await,
        Command::Info { channel } => info(ctx, channel, out).await,
        Command::StreamUrl { channel } => print_stream_url(channel, out),
        Command::Play { channel } => play_channel(ctx, channel, out),
        Command::Infinite { url, play, random } => infinite(ctx, url, play, random, out).await,
        Command::Config { action } => match action {
            ConfigAction::Show => show_config(ctx, out),
            ConfigAction::Init => init_config(&ctx.config_path, out),
        },
    }
}

/// Channel panels, side by side when the terminal is wide enough.
pub async fn now(
    ctx: &Context,
    art: Option<ArtOptions>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let status = ctx.status();
    let live = ctx.client.live().await?;

    let count = live.results.len();
    let width = to_cells(ctx.width);
    let full = Rect::new(0, 0, width, 1);
    let slots: Vec<Rect> = if count > 1 && ctx.width >= STACK_WIDTH {
        let share = u32::try_from(count).unwrap_or(u32::MAX);
        Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, share)))
            .split(full)
            .to_vec()
    } else {
        vec![full]
    };

    let mut columns: Vec<Vec<Panel>> = slots.iter().map(|_| Vec::new()).collect();
    for (idx, channel) in live.results.iter().enumerate() {
        let slot = idx.min(slots.len() - 1);
        let column_width = slots[slot].width;
        if let (Some(options), Some(url)) = (&art, channel.now.artwork_url()) {
            let mut options = *options;
            options.width = options.width.min(Panel::inner_width(column_width));
            let result = fetch_art(&ctx.client, url, &options).await;
            columns[slot].push(art_panel(result));
        }
        columns[slot].push(channel_panel(channel, channel_number(idx), &ctx.times));
    }
    drop(status);

    let height = columns
        .iter()
        .zip(&slots)
        .map(|(panels, slot)| column_height(panels, slot.width))
        .max()
        .unwrap_or(0);
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    for (panels, slot) in columns.iter().zip(&slots) {
        let area = Rect { height, ..*slot };
        let heights = panels.iter().map(|p| Constraint::Length(p.height(slot.width)));
        for (panel, area) in panels.iter().zip(Layout::vertical(heights).split(area).iter()) {
            panel.render(*area, &mut buffer);
        }
    }
    write_lines(out, &buffer_lines(&buffer), &ctx.theme)
}

fn column_height(panels: &[Panel], width: u16) -> u16 {
    panels
        .iter()
        .fold(0u16, |total, p| total.saturating_add(p.height(width)))
}

/// One schedule table per channel.
pub async fn schedule(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    let status = ctx.status();
    let live = ctx.client.live().await?;
    drop(status);

    for (idx, channel) in live.results.iter().enumerate() {
        let table = schedule_table(channel, channel_number(idx), &ctx.times);
        let buffer = render_to_buffer(&table, table.width(to_cells(ctx.width)), table.height());
        write_lines(out, &buffer_lines(&buffer), &ctx.theme)?;
        writeln!(out)?;
    }
    Ok(())
}

/// The live endpoint's response, pretty printed.
pub async fn json(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    let status = ctx.status();
    let value = ctx.client.live_raw().await?;
    drop(status);

    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

/// Detailed current-show info for one channel or all of them.
pub async fn info(
    ctx: &Context,
    channel: Option<u8>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let status = ctx.status();
    let live = ctx.client.live().await?;
    drop(status);

    let selected: Vec<(u8, _)> = match channel {
        Some(number) => {
            let found = live.channel(number).ok_or(CommandError::NoChannel(number))?;
            vec![(number, found)]
        }
        None => live
            .results
            .iter()
            .enumerate()
            .map(|(idx, c)| (channel_number(idx), c))
            .collect(),
    };

    for (i, (number, channel)) in selected.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let lines = wrap_text(&show_info(channel, number, &ctx.times), to_cells(ctx.width));
        write_lines(out, &lines, &ctx.theme)?;
    }
    Ok(())
}

pub fn print_stream_url(channel: u8, out: &mut impl Write) -> Result<(), CommandError> {
    let url = stream_url(channel).ok_or(CommandError::NoChannel(channel))?;
    writeln!(out, "{}", url)?;
    Ok(())
}

fn play_channel(ctx: &Context, channel: u8, out: &mut impl Write) -> Result<(), CommandError> {
    let url = stream_url(channel).ok_or(CommandError::NoChannel(channel))?;
    play_stream(ctx, &format!("NTS Channel {}", channel), url, out)
}

/// List, print or play Infinite Mixtapes.
pub async fn infinite(
    ctx: &Context,
    url: bool,
    play: Option<String>,
    random: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let status = ctx.status();
    let mixtapes = ctx.client.mixtapes().await?;
    drop(status);

    let selected = match play {
        Some(alias) => Some(find_mixtape(&mixtapes, &alias)?),
        None if random => Some(
            mixtapes
                .choose(&mut rand::thread_rng())
                .ok_or(CommandError::NoMixtapes)?,
        ),
        None => None,
    };

    match selected {
        None if mixtapes.is_empty() => {
            writeln!(out, "No mixtapes available.")?;
            Ok(())
        }
        None => write_lines(out, &mixtape_lines(&mixtapes, url), &ctx.theme),
        Some(mixtape) if url => {
            writeln!(out, "{}", mixtape.audio_stream_endpoint)?;
            Ok(())
        }
        Some(mixtape) => play_stream(ctx, &mixtape.title, &mixtape.audio_stream_endpoint, out),
    }
}

/// Look up a mixtape by alias, ignoring case.
pub fn find_mixtape<'a>(mixtapes: &'a [Mixtape], alias: &str) -> Result<&'a Mixtape, CommandError> {
    let alias = alias.trim();
    mixtapes
        .iter()
        .find(|m| m.mixtape_alias.eq_ignore_ascii_case(alias))
        .ok_or_else(|| CommandError::UnknownMixtape(alias.to_string()))
}

fn play_stream(
    ctx: &Context,
    name: &str,
    url: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    writeln!(out, "Playing {}... (Ctrl+C to stop)", name)?;
    out.flush()?;
    player::setup_ctrlc_handler()?;
    ctx.player.play(url)?;
    Ok(())
}

/// Effective settings after config file, environment and defaults.
pub fn show_config(ctx: &Context, out: &mut impl Write) -> Result<(), CommandError> {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let player = std::iter::once(ctx.player.command().to_string())
        .chain(ctx.player.arguments("<url>"))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(out, "Current configuration:")?;
    writeln!(out, "  API URL: {}", ctx.client.base_url())?;
    writeln!(out, "  Timeout: {}s", ctx.config.timeout().as_secs())?;
    writeln!(out, "  Color: {}", yes_no(ctx.theme.color_enabled()))?;
    writeln!(out, "  Time format: {}", ctx.times.pattern())?;
    writeln!(
        out,
        "  Art: {}x{}, {}",
        ctx.config.art_width(),
        ctx.config.art_height(),
        ctx.config.art_charset().name()
    )?;
    writeln!(out, "  Invert art: {}", yes_no(ctx.config.art.invert))?;
    writeln!(out, "  Dither art: {}", yes_no(ctx.config.art.dither))?;
    writeln!(out, "  Player: {}", player)?;
    writeln!(out)?;

    let state = if ctx.config_path.exists() {
        "exists"
    } else {
        "not found"
    };
    writeln!(out, "Config file: {} ({})", ctx.config_path.display(), state)?;
    Ok(())
}

/// Write the default config file to `path`, refusing to overwrite.
pub fn init_config(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::ConfigExists(path.to_path_buf()));
    }

    let write_error = |source| CommandError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(write_error)?;

    writeln!(out, "Created config file: {}", path.display())?;
    Ok(())
}

fn channel_number(idx: usize) -> u8 {
    u8::try_from(idx + 1).unwrap_or(u8::MAX)
}

fn write_lines(out: &mut impl Write, lines: &[Line], theme: &Theme) -> Result<(), CommandError> {
    for line in lines {
        writeln!(out, "{}", theme.render_line(line))?;
    }
    Ok(())
}
