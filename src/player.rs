//! Playback through an external media player.

use std::process::{Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};

/// Player used when the config does not name one.
pub const DEFAULT_PLAYER: &str = "mpv";

/// Arguments passed to the default player before the stream URL.
pub const DEFAULT_PLAYER_ARGS: &[&str] = &["--no-video"];

/// Set once the user presses Ctrl+C while a player is running.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Keep this process alive on Ctrl+C so the player can shut down first.
///
/// The terminal delivers SIGINT to the whole foreground process group, so the
/// player still receives it.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

/// An external media player invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    command: String,
    args: Vec<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(
            DEFAULT_PLAYER,
            DEFAULT_PLAYER_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

impl Player {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Program arguments for playing `url`.
    pub fn arguments(&self, url: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(url.to_string());
        args
    }

    /// Play `url` and block until the player exits.
    pub fn play(&self, url: &str) -> Result<(), PlayerError> {
        log::info!("Starting {} for {}", self.command, url);

        let mut child = Command::new(&self.command)
            .args(self.arguments(url))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlayerError::NotFound {
                        player: self.command.clone(),
                    }
                } else {
                    PlayerError::Spawn {
                        player: self.command.clone(),
                        source: e,
                    }
                }
            })?;

        let status = child.wait().map_err(|e| PlayerError::Spawn {
            player: self.command.clone(),
            source: e,
        })?;
        self.check_status(status)
    }

    fn check_status(&self, status: ExitStatus) -> Result<(), PlayerError> {
        if status.success() || ctrlc_received() {
            log::info!("{} exited ({})", self.command, status);
            return Ok(());
        }
        Err(PlayerError::Exited {
            player: self.command.clone(),
            code: status.code(),
        })
    }
}

/// Errors that can occur when launching the media player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Media player '{player}' not found. Install it or set [player] command in the config file.")]
    NotFound { player: String },

    #[error("Failed to run '{player}': {source}")]
    Spawn {
        player: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{player}' exited with {}", exit_description(.code))]
    Exited { player: String, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
