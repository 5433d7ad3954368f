//! Cosmetic colour themes.
//!
//! A theme is either one of the named presets or a custom background
//! colour given as `#rrggbb`, in which case the foreground is picked
//! for contrast.

use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, instrument};

use crate::error::ThemeError;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Dark text used on bright custom backgrounds (`#333333`).
pub const DARK_TEXT: Rgb = Rgb::new(0x33, 0x33, 0x33);
/// Light text used on dim custom backgrounds (`#f2f2f2`).
pub const LIGHT_TEXT: Rgb = Rgb::new(0xf2, 0xf2, 0xf2);

impl Rgb {
    /// Creates a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    #[instrument]
    pub fn from_hex(s: &str) -> Result<Self, ThemeError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::new(s));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ThemeError::new(s))?;
        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Perceived brightness, 0-255.
    pub fn brightness(self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }

    /// Text colour that stays readable on this background.
    pub fn contrast(self) -> Rgb {
        if self.brightness() > 125 {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Built-in presets offered by the theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedTheme {
    /// The terminal's own colours.
    #[default]
    Default,
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
    /// Green.
    Green,
    /// Aqua.
    Aqua,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
}

/// Colours a theme paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Regular text.
    pub foreground: Color,
    /// Titles and banners.
    pub accent: Color,
    /// The X mark.
    pub x: Color,
    /// The O mark.
    pub o: Color,
    /// Background of highlighted winning cells.
    pub highlight: Color,
}

/// The active theme. Exactly one is applied at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    /// A built-in preset.
    Named(NamedTheme),
    /// A custom background colour.
    Custom(Rgb),
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Named(NamedTheme::Default)
    }
}

impl Theme {
    /// Every named preset, in selector order.
    pub fn presets() -> Vec<Theme> {
        NamedTheme::iter().map(Theme::Named).collect()
    }

    /// Colours for this theme.
    #[instrument]
    pub fn palette(self) -> Palette {
        let rgb = |r, g, b| Color::Rgb(r, g, b);
        match self {
            Theme::Named(NamedTheme::Default) => Palette {
                background: Color::Reset,
                foreground: Color::Reset,
                accent: Color::Cyan,
                x: Color::Blue,
                o: Color::Red,
                highlight: Color::Green,
            },
            Theme::Named(NamedTheme::Light) => Palette {
                background: rgb(0xf2, 0xf2, 0xf2),
                foreground: rgb(0x33, 0x33, 0x33),
                accent: rgb(0x44, 0x44, 0x88),
                x: rgb(0x1e, 0x5a, 0xc8),
                o: rgb(0xc8, 0x32, 0x32),
                highlight: rgb(0xb4, 0xe6, 0xb4),
            },
            Theme::Named(NamedTheme::Dark) => Palette {
                background: rgb(0x22, 0x22, 0x22),
                foreground: rgb(0xf2, 0xf2, 0xf2),
                accent: rgb(0x80, 0xcb, 0xc4),
                x: rgb(0x64, 0xb5, 0xf6),
                o: rgb(0xef, 0x9a, 0x9a),
                highlight: rgb(0x2e, 0x7d, 0x32),
            },
            Theme::Named(NamedTheme::Green) => Palette {
                background: rgb(0x2e, 0x7d, 0x32),
                foreground: rgb(0xf1, 0xf8, 0xe9),
                accent: rgb(0xc5, 0xe1, 0xa5),
                x: rgb(0xff, 0xff, 0xff),
                o: rgb(0xff, 0xeb, 0x3b),
                highlight: rgb(0x1b, 0x5e, 0x20),
            },
            Theme::Named(NamedTheme::Aqua) => Palette {
                background: rgb(0x00, 0xac, 0xc1),
                foreground: rgb(0x00, 0x25, 0x2b),
                accent: rgb(0xe0, 0xf7, 0xfa),
                x: rgb(0x0d, 0x47, 0xa1),
                o: rgb(0xb7, 0x1c, 0x1c),
                highlight: rgb(0x80, 0xde, 0xea),
            },
            Theme::Named(NamedTheme::Purple) => Palette {
                background: rgb(0x5e, 0x35, 0xb1),
                foreground: rgb(0xed, 0xe7, 0xf6),
                accent: rgb(0xd1, 0xc4, 0xe9),
                x: rgb(0xff, 0xff, 0xff),
                o: rgb(0xff, 0xd5, 0x4f),
                highlight: rgb(0x31, 0x1b, 0x92),
            },
            Theme::Named(NamedTheme::Orange) => Palette {
                background: rgb(0xfb, 0x8c, 0x00),
                foreground: rgb(0x3e, 0x27, 0x23),
                accent: rgb(0xff, 0xf3, 0xe0),
                x: rgb(0x1a, 0x23, 0x7e),
                o: rgb(0xb7, 0x1c, 0x1c),
                highlight: rgb(0xff, 0xcc, 0x80),
            },
            Theme::Custom(background) => {
                let foreground = background.contrast();
                Palette {
                    background: background.into(),
                    foreground: foreground.into(),
                    accent: foreground.into(),
                    x: foreground.into(),
                    o: foreground.into(),
                    highlight: Color::Green,
                }
            }
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Named(named) => write!(f, "{named}"),
            Theme::Custom(rgb) => write!(f, "{rgb}"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Parses a preset name, falling back to a `#rrggbb` colour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(named) = NamedTheme::from_str(s.trim()) {
            return Ok(Theme::Named(named));
        }
        let rgb = Rgb::from_hex(s)?;
        debug!(colour = %rgb, "Custom theme colour");
        Ok(Theme::Custom(rgb))
    }
}

impl TryFrom<String> for Theme {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_accepts_optional_hash() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(0xff, 0x80, 0x00)));
        assert_eq!(Rgb::from_hex("0A0B0C"), Ok(Rgb::new(0x0a, 0x0b, 0x0c)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_brightness_threshold() {
        // 125 exactly is not bright enough for dark text.
        assert_eq!(Rgb::new(125, 125, 125).brightness(), 125);
        assert_eq!(Rgb::new(125, 125, 125).contrast(), LIGHT_TEXT);
        assert_eq!(Rgb::new(126, 126, 126).contrast(), DARK_TEXT);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for theme in [Theme::Named(NamedTheme::Aqua), Theme::Custom(Rgb::new(1, 2, 3))] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_presets_start_with_default() {
        let presets = Theme::presets();
        assert_eq!(presets.len(), 7);
        assert_eq!(presets[0], Theme::default());
    }
}
