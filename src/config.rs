//! Configuration file handling for nts-cli.
//!
//! Loads configuration from `<config dir>/nts-cli/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_TIMEOUT, NTS_API_BASE_URL};
use crate::ascii::{CharSet, DEFAULT_ART_HEIGHT, DEFAULT_ART_WIDTH};
use crate::format::{validate_pattern, DEFAULT_TIME_FORMAT};
use crate::player::{Player, DEFAULT_PLAYER, DEFAULT_PLAYER_ARGS};

/// Contents written by `nts config init`.
pub const DEFAULT_CONFIG: &str = r#"# nts-cli configuration

[api]
# NTS API endpoint (the NTS_API_URL environment variable takes precedence)
base_url = "https://www.nts.live/api/v2"
# Request timeout in seconds
timeout_secs = 30

[display]
# Colored output (also disabled by --no-color or NO_COLOR)
color = true
# strftime pattern for show times
time_format = "%H:%M"

[art]
# Size of show art in characters
width = 80
height = 40
# Character set: pixels, standard, blocks, minimal, braille
charset = "pixels"
# Invert brightness (for light themes)
invert = false
# Dither ramp charsets
dither = false

[player]
# Media player used by `play` and `infinite --play`
command = "mpv"
args = ["--no-video"]
"#;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub art: ArtConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub time_format: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            time_format: None,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArtConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub dither: bool,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_file(path)?
            }
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_file(&path)?
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Config::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.art.charset {
            if CharSet::from_name(name).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "unknown art charset '{}' (expected pixels, standard, blocks, minimal or braille)",
                    name
                )));
            }
        }
        if self.art.width == Some(0) || self.art.height == Some(0) {
            return Err(ConfigError::Invalid(
                "art width and height must be greater than 0".to_string(),
            ));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "api timeout_secs must be greater than 0".to_string(),
            ));
        }
        if let Some(pattern) = &self.display.time_format {
            validate_pattern(pattern).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        if matches!(&self.player.command, Some(c) if c.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "player command must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(NTS_API_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.api
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn time_format(&self) -> &str {
        self.display
            .time_format
            .as_deref()
            .unwrap_or(DEFAULT_TIME_FORMAT)
    }

    pub fn art_width(&self) -> u16 {
        self.art.width.unwrap_or(DEFAULT_ART_WIDTH)
    }

    pub fn art_height(&self) -> u16 {
        self.art.height.unwrap_or(DEFAULT_ART_HEIGHT)
    }

    pub fn art_charset(&self) -> CharSet {
        self.art
            .charset
            .as_deref()
            .and_then(CharSet::from_name)
            .unwrap_or_default()
    }

    pub fn player(&self) -> Player {
        let command = self.player.command.as_deref().unwrap_or(DEFAULT_PLAYER);
        let args = match &self.player.args {
            Some(args) => args.clone(),
            // Default args only make sense for the default player.
            None if command == DEFAULT_PLAYER => {
                DEFAULT_PLAYER_ARGS.iter().map(|a| a.to_string()).collect()
            }
            None => Vec::new(),
        };
        Player::new(command, args)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("nts-cli")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.base_url(), NTS_API_BASE_URL);
        assert_eq!(config.art_width(), 80);
        assert_eq!(config.art_height(), 40);
        assert_eq!(config.art_charset(), CharSet::Pixels);
        assert_eq!(config.player(), Player::default());
        assert!(config.display.color);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.time_format(), "%H:%M");
        assert!(config.display.color);
    }

    #[test]
    fn test_load_explicit_path() {
        let file = write_config(
            r#"
[display]
color = false
time_format = "%I:%M %p"

[art]
width = 40
charset = "braille"

[player]
command = "vlc"
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.display.color);
        assert_eq!(config.time_format(), "%I:%M %p");
        assert_eq!(config.art_width(), 40);
        assert_eq!(config.art_height(), 40);
        assert_eq!(config.art_charset(), CharSet::Braille);
        assert_eq!(config.player(), Player::new("vlc", Vec::new()));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/nts-cli/config.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let file = write_config("[art\nwidth = ");
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_misspelled_keys() {
        for content in [
            "[art]\nwidht = 40\n",
            "[api]\ntimeout = 5\n",
            "[display]\ncolour = false\n",
            "[player]\ncmd = \"vlc\"\n",
        ] {
            let file = write_config(content);
            let result = Config::load(Some(file.path()));
            assert!(matches!(result, Err(ConfigError::Parse { .. })), "{}", content);
        }
    }

    #[test]
    fn test_load_rejects_unknown_charset() {
        let file = write_config("[art]\ncharset = \"sixel\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("unknown art charset 'sixel'"));
    }

    #[test]
    fn test_load_rejects_zero_art_size() {
        let file = write_config("[art]\nwidth = 0\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_time_format() {
        let file = write_config("[display]\ntime_format = \"%Q\"\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let file = write_config("[camera]\ndevice = 0\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_default_path_location() {
        let path = default_path();
        assert!(path.ends_with("nts-cli/config.toml"));
    }
}
