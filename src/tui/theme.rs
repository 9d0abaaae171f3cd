// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Style};

pub(crate) const PALETTE_ENV: &str = "ASTREE_TUI_PALETTE";

/// Terminal colors for the viewer.
///
/// Without a palette override, node, edge and label colors come from the drawn style itself.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn node_color(&self, css: &str) -> Color {
        self.pick(css, |palette| palette.node, Color::Green)
    }

    pub(crate) fn edge_color(&self, css: &str) -> Color {
        self.pick(css, |palette| palette.edge, Color::Gray)
    }

    pub(crate) fn label_color(&self, css: &str) -> Color {
        self.pick(css, |palette| palette.label, Color::White)
    }

    pub(crate) fn status_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    fn pick(&self, css: &str, from_palette: impl Fn(&TuiPalette) -> Color, fallback: Color) -> Color {
        match &self.palette {
            Some(palette) => from_palette(palette),
            None => parse_palette_color(css).unwrap_or(fallback),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TuiPalette {
    node: Color,
    edge: Color,
    label: Color,
}

impl TuiPalette {
    const CSV_LEN: usize = 3;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (node,edge,label), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            node: parse_palette_color(parts[0])?,
            edge: parse_palette_color(parts[1])?,
            label: parse_palette_color(parts[2])?,
        })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let value = match env::var(PALETTE_ENV) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: PALETTE_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed).map(Some).map_err(|error| ThemeError::InvalidEnv {
        name: PALETTE_ENV.to_owned(),
        value: format!("{trimmed} ({error})"),
    })
}

/// Parses `#rrggbb`, `#rgb`, `0xrrggbb` or X11 `rgb:rr/gg/bb` colors.
pub(crate) fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        return Ok(Color::Rgb(
            parse_hex_channel(parts[0])?,
            parse_hex_channel(parts[1])?,
            parse_hex_channel(parts[2])?,
        ));
    }

    let hex = lower
        .strip_prefix('#')
        .or_else(|| lower.strip_prefix("0x"))
        .unwrap_or(lower.as_str());
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed}"));
    }

    let rgb = match hex.len() {
        6 => u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?,
        // `#abc` is shorthand for `#aabbcc`.
        3 => {
            let doubled: String = hex.chars().flat_map(|ch| [ch, ch]).collect();
            u32::from_str_radix(&doubled, 16)
                .map_err(|_| format!("invalid hex color: {trimmed}"))?
        }
        _ => return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB or #RGB)")),
    };

    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;
    use rstest::rstest;

    use super::{parse_palette_color, TuiPalette, TuiTheme};

    #[rstest]
    #[case::long_hex("#4CAF50", Color::Rgb(0x4c, 0xaf, 0x50))]
    #[case::short_hex("#333", Color::Rgb(0x33, 0x33, 0x33))]
    #[case::prefixed("0x0000ff", Color::Rgb(0, 0, 0xff))]
    #[case::x11_two_digit("rgb:ff/80/00", Color::Rgb(0xff, 0x80, 0))]
    #[case::x11_four_digit("rgb:ffff/8000/0000", Color::Rgb(0xff, 0x80, 0))]
    fn parses_supported_color_forms(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(parse_palette_color(input), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::bad_digits("#ggg")]
    #[case::odd_length("#12345")]
    #[case::short_x11("rgb:ff/00")]
    fn rejects_invalid_colors(#[case] input: &str) {
        assert!(parse_palette_color(input).is_err());
    }

    #[test]
    fn palette_override_parses_valid_csv() {
        let palette = TuiPalette::parse_csv("#111111, #222 ,rgb:fe/fe/fe").expect("palette");
        assert_eq!(palette.node, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.edge, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.label, Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_override_rejects_wrong_arity() {
        let err = TuiPalette::parse_csv("#111111,#222222").unwrap_err();
        assert!(err.contains("node,edge,label"), "{err}");
    }

    #[test]
    fn drawn_colors_apply_without_override() {
        let theme = TuiTheme::default();
        assert_eq!(theme.node_color("#4CAF50"), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(theme.edge_color("not-a-color"), Color::Gray);
    }

    #[test]
    fn override_wins_over_drawn_colors() {
        let palette = TuiPalette::parse_csv("#010101,#020202,#030303").expect("palette");
        let theme = TuiTheme { palette: Some(palette) };
        assert_eq!(theme.node_color("#4CAF50"), Color::Rgb(1, 1, 1));
        assert_eq!(theme.label_color("#000"), Color::Rgb(3, 3, 3));
    }
}
