//! Resolved settings shared by every command.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use crossterm::cursor::MoveToColumn;
use crossterm::terminal::{Clear, ClearType};

use super::commands::CommandError;
use super::enums::ArtCharset;
use crate::api::{NtsClient, NTS_API_URL_ENV};
use crate::ascii::ArtOptions;
use crate::config::Config;
use crate::format::{palette, Theme, TimeFormatter};
use crate::player::Player;

/// Width assumed when the terminal size cannot be queried (e.g. piped output).
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Shown on stderr while waiting for the API.
pub const FETCHING_MESSAGE: &str = "Fetching NTS data...";

/// Everything a command needs: client, output settings and config.
pub struct Context {
    pub client: NtsClient,
    pub config: Config,
    pub config_path: PathBuf,
    pub theme: Theme,
    pub times: TimeFormatter,
    pub player: Player,
    /// Output width in terminal cells
    pub width: usize,
    /// Whether to show the fetching indicator on stderr
    pub show_status: bool,
}

impl Context {
    /// Resolve settings for a real run.
    ///
    /// Precedence is CLI flag, then environment (`NTS_API_URL`, `NO_COLOR`),
    /// then the config file, then built-in defaults.
    pub fn new(config: Config, config_path: PathBuf, no_color: bool) -> Result<Self, CommandError> {
        let base_url = std::env::var(NTS_API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.base_url().to_string());
        log::debug!("Using NTS API at {}", base_url);

        let client = NtsClient::with_options(base_url, config.timeout())?;
        let theme = Theme::resolve(no_color, config.display.color);
        let times = TimeFormatter::local().with_pattern(config.time_format())?;

        let mut ctx = Self::from_parts(client, config, theme, times);
        ctx.config_path = config_path;
        ctx.width = terminal_width();
        ctx.show_status = std::io::stderr().is_terminal();
        Ok(ctx)
    }

    /// Build a context from already-resolved parts.
    ///
    /// Output width defaults to [`DEFAULT_TERMINAL_WIDTH`] and the status
    /// indicator is off.
    pub fn from_parts(client: NtsClient, config: Config, theme: Theme, times: TimeFormatter) -> Self {
        let player = config.player();
        Self {
            client,
            config,
            config_path: crate::config::default_path(),
            theme,
            times,
            player,
            width: DEFAULT_TERMINAL_WIDTH,
            show_status: false,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Art options from command-line overrides on top of the config.
    pub fn art_options(
        &self,
        width: Option<u16>,
        height: Option<u16>,
        charset: Option<ArtCharset>,
    ) -> ArtOptions {
        ArtOptions {
            width: width.unwrap_or_else(|| self.config.art_width()),
            height: height.unwrap_or_else(|| self.config.art_height()),
            charset: charset
                .map(Into::into)
                .unwrap_or_else(|| self.config.art_charset()),
            color: self.theme.color_enabled(),
            invert: self.config.art.invert,
            dither: self.config.art.dither,
        }
    }

    /// Show the fetching indicator until the returned guard is dropped.
    pub fn status(&self) -> StatusLine {
        StatusLine::show(self.show_status, &self.theme)
    }
}

/// A transient status message on stderr, cleared on drop.
pub struct StatusLine {
    active: bool,
}

impl StatusLine {
    fn show(enabled: bool, theme: &Theme) -> Self {
        if !enabled {
            return Self { active: false };
        }
        let mut stderr = std::io::stderr();
        let active = write!(stderr, "{}", theme.paint(FETCHING_MESSAGE, palette::STATUS))
            .and_then(|_| stderr.flush())
            .is_ok();
        Self { active }
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        if self.active {
            let _ = crossterm::execute!(
                std::io::stderr(),
                MoveToColumn(0),
                Clear(ClearType::CurrentLine)
            );
        }
    }
}

/// Current terminal width, or [`DEFAULT_TERMINAL_WIDTH`] when unknown.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
