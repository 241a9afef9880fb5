// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::PanelLineKind;

const PALETTE_ENV: &str = "DOCDECK_TUI_PALETTE";
const PALETTE_ENV_FALLBACK: &str = "DOCDECK_PALETTE";

/// Colors for the guide shell. Without a palette override the terminal's own ANSI colors
/// are used.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Ok(Self { palette: palette_override_from_env()? })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi(&self, color: Ansi) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color as usize],
            None => color.into(),
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.ansi(Ansi::BrightGreen))
        } else {
            self.base_style()
        }
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::BrightWhite)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn subtitle_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::White))
    }

    /// The navigation control for the current section.
    pub(crate) fn active_nav_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi(Ansi::BrightBlue))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub(crate) fn cursor_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::UNDERLINED)
    }

    pub(crate) fn hint_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi(Ansi::Black))
            .bg(self.ansi(Ansi::Yellow))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::Cyan))
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::White))
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::BrightBlack))
    }

    pub(crate) fn line_style(&self, kind: PanelLineKind) -> Style {
        match kind {
            PanelLineKind::Heading => self.header_style().add_modifier(Modifier::UNDERLINED),
            PanelLineKind::FeatureTitle => {
                self.base_style().fg(self.ansi(Ansi::BrightBlue)).add_modifier(Modifier::BOLD)
            }
            PanelLineKind::Code => self.base_style().fg(self.ansi(Ansi::Green)),
            PanelLineKind::Bullet | PanelLineKind::Text | PanelLineKind::Blank => {
                self.base_style()
            }
        }
    }

    pub(crate) fn search_match_style(&self) -> Style {
        self.base_style().fg(self.ansi(Ansi::Black)).bg(self.ansi(Ansi::Magenta))
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg, then the 16 ANSI colors black..bright_white), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;
        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(&parts[2..]) {
            *slot = parse_palette_color(part)?;
        }
        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let mut found = None;
    for name in [PALETTE_ENV, PALETTE_ENV_FALLBACK] {
        match env::var(name) {
            Ok(value) => {
                found = Some((name, value));
                break;
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: name.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        }
    }

    let Some((name, value)) = found else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed).map(Some).map_err(|error| ThemeError::InvalidEnv {
        name: name.to_owned(),
        value: format!("{trimmed} ({error})"),
    })
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB`, or X11 `rgb:RR/GG/BB` (2 or 4 hex digits).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest.split('/').map(parse_hex_channel).collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels[..] else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = lower.strip_prefix('#').or_else(|| lower.strip_prefix("0x")).unwrap_or(&lower);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let parsed = match value.len() {
        2 => u8::from_str_radix(value, 16).ok(),
        4 => u16::from_str_radix(value, 16).ok().map(|wide| (wide >> 8) as u8),
        _ => None,
    };
    parsed.ok_or_else(|| format!("invalid rgb: component {value} (expected 2 or 4 hex digits)"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi> for Color {
    fn from(value: Ansi) -> Self {
        match value {
            Ansi::Black => Color::Black,
            Ansi::Red => Color::Red,
            Ansi::Green => Color::Green,
            Ansi::Yellow => Color::Yellow,
            Ansi::Blue => Color::Blue,
            Ansi::Magenta => Color::Magenta,
            Ansi::Cyan => Color::Cyan,
            Ansi::White => Color::Gray,
            Ansi::BrightBlack => Color::DarkGray,
            Ansi::BrightRed => Color::LightRed,
            Ansi::BrightGreen => Color::LightGreen,
            Ansi::BrightYellow => Color::LightYellow,
            Ansi::BrightBlue => Color::LightBlue,
            Ansi::BrightMagenta => Color::LightMagenta,
            Ansi::BrightCyan => Color::LightCyan,
            Ansi::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Modifier};

    use super::{parse_palette_color, TuiPalette, TuiTheme};

    #[test]
    fn palette_override_parses_valid_csv() {
        let palette = TuiPalette::parse_csv(
            "#111111,#222222,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,#fefefe",
        )
        .expect("palette");

        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi[1], Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi[15], Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_override_rejects_short_csv() {
        let err = TuiPalette::parse_csv("nope").unwrap_err();
        assert!(err.contains("expected"));
    }

    #[test]
    fn colors_accept_x11_rgb_form() {
        assert_eq!(parse_palette_color("rgb:ff/80/00"), Ok(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_palette_color("rgb:ffff/0000/8080"), Ok(Color::Rgb(0xff, 0x00, 0x80)));
        assert!(parse_palette_color("rgb:ff/80").is_err());
        assert!(parse_palette_color("#12345").is_err());
    }

    #[test]
    fn default_theme_marks_active_nav_reversed_and_bold() {
        let style = TuiTheme::default().active_nav_style();
        assert!(style.add_modifier.contains(Modifier::REVERSED | Modifier::BOLD));
        assert_eq!(style.fg, Some(Color::LightBlue));
    }
}
