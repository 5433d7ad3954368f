//! Command-line interface for duel_tictactoe.

use std::path::PathBuf;

use clap::Parser;
use duel_tictactoe::{ConfigOverrides, Theme};

/// Duel Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "duel_tictactoe")]
#[command(about = "Two-player tic-tac-toe with scores and themes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "duel.toml")]
    pub config: PathBuf,

    /// Player 1's name; with --player2 the name prompts are skipped
    #[arg(long)]
    pub player1: Option<String>,

    /// Player 2's name
    #[arg(long)]
    pub player2: Option<String>,

    /// Player 1's symbol (X or O)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Startup theme: default, light, dark, green, aqua, purple, orange or #rrggbb
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Milliseconds to show a finished round before clearing the board
    #[arg(long)]
    pub reset_delay_ms: Option<u64>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags that override the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            symbol: self.symbol.clone(),
            theme: self.theme,
            reset_delay_ms: self.reset_delay_ms,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_tictactoe::{NamedTheme, Rgb};

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["duel_tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("duel.toml"));
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_theme_flag_accepts_names_and_colours() {
        let cli = Cli::parse_from(["duel_tictactoe", "--theme", "Purple"]);
        assert_eq!(cli.theme, Some(Theme::Named(NamedTheme::Purple)));
        let cli = Cli::parse_from(["duel_tictactoe", "-t", "#000000"]);
        assert_eq!(cli.theme, Some(Theme::Custom(Rgb::new(0, 0, 0))));
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        assert!(Cli::try_parse_from(["duel_tictactoe", "--theme", "plaid"]).is_err());
    }
}
