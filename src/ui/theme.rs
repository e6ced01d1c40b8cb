use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Display theme, session-only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Colors used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub ok: Color,
    pub error: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x11, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0x8b, 0x5c, 0xf6),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
    error: Color::Rgb(0xef, 0x44, 0x44),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xfa, 0xfc),
    text: Color::Rgb(0x11, 0x18, 0x27),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    accent: Color::Rgb(0x6d, 0x28, 0xd9),
    ok: Color::Rgb(0x15, 0x80, 0x3d),
    error: Color::Rgb(0xb9, 0x1c, 0x1c),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
};

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }

    /// Label of the toggle: names the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀ Light mode",
            ThemeMode::Light => "☾ Dark mode",
        }
    }
}
