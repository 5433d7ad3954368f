//! Game configuration loaded from TOML, with command-line overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ConfigError;
use crate::setup::{self, Resolution};
use crate::theme::Theme;

/// Pause between a finished round and the board reset.
pub const DEFAULT_RESET_DELAY_MS: u64 = 2000;

#[instrument]
fn default_reset_delay_ms() -> u64 {
    DEFAULT_RESET_DELAY_MS
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("duel_tictactoe.log")
}

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Pre-seeded name for player 1.
    #[serde(default)]
    player1: Option<String>,

    /// Pre-seeded name for player 2.
    #[serde(default)]
    player2: Option<String>,

    /// Pre-seeded symbol choice for player 1 ("X" or "O").
    #[serde(default)]
    symbol: Option<String>,

    /// Theme applied at startup.
    #[serde(default)]
    theme: Theme,

    /// Milliseconds to wait after a win or tie before clearing the board.
    #[serde(default = "default_reset_delay_ms")]
    reset_delay_ms: u64,

    /// File receiving trace output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            player1: None,
            player2: None,
            symbol: None,
            theme: Theme::default(),
            reset_delay_ms: default_reset_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

/// Values that take precedence over the file, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Player 1 name.
    pub player1: Option<String>,
    /// Player 2 name.
    pub player2: Option<String>,
    /// Player 1 symbol choice.
    pub symbol: Option<String>,
    /// Startup theme.
    pub theme: Option<Theme>,
    /// Reset delay in milliseconds.
    pub reset_delay_ms: Option<u64>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

impl DuelConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(theme = %config.theme, reset_delay_ms = config.reset_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.player1.is_some() {
            self.player1 = overrides.player1;
        }
        if overrides.player2.is_some() {
            self.player2 = overrides.player2;
        }
        if overrides.symbol.is_some() {
            self.symbol = overrides.symbol;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(ms) = overrides.reset_delay_ms {
            self.reset_delay_ms = ms;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Delay between a terminal outcome and the board reset.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Resolves the pre-seeded identities when both names are given.
    ///
    /// A missing symbol is resolved like any other answer, so it falls
    /// back to X with a notice.
    #[instrument(skip(self))]
    pub fn seeded_roster(&self) -> Option<Resolution> {
        let (player1, player2) = (self.player1.as_deref()?, self.player2.as_deref()?);
        Some(setup::resolve(player1, player2, self.symbol.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NamedTheme;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = DuelConfig::from_toml("").unwrap();
        assert_eq!(config, DuelConfig::default());
        assert_eq!(config.reset_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = DuelConfig::from_toml("theme = \"green\"\nreset_delay_ms = 10\n")
            .unwrap()
            .with_overrides(ConfigOverrides {
                theme: Some(Theme::Named(NamedTheme::Purple)),
                ..Default::default()
            });
        assert_eq!(*config.theme(), Theme::Named(NamedTheme::Purple));
        assert_eq!(*config.reset_delay_ms(), 10);
    }

    #[test]
    fn test_seeded_roster_requires_both_names() {
        let config = DuelConfig::default().with_overrides(ConfigOverrides {
            player1: Some("Ann".into()),
            ..Default::default()
        });
        assert!(config.seeded_roster().is_none());
    }
}
