//! Theme configuration for the TUI.
//!
//! Themes are bundled with the binary as JSON and resolved by name at
//! startup. A malformed bundle or an unknown theme name aborts startup
//! rather than drawing with broken colors.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Bundled theme definitions.
const THEMES_JSON: &str = include_str!("../../assets/themes.json");

/// Raw theme entry as written in the bundle, colors as "#RRGGBB" strings.
#[derive(Debug, Deserialize)]
struct ThemeSpec {
    fg: String,
    border: String,
    title: String,
    highlight_bg: String,
    error: String,
    series: Vec<String>,
}

/// Resolved color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    pub fg: Color,
    pub border: Color,
    pub title: Color,
    pub highlight_bg: Color,
    pub error: Color,
    pub series_colors: Vec<Color>,
}

impl Theme {
    /// Resolve a named theme from the bundled definitions.
    pub fn load(name: &str) -> Result<Self> {
        let specs = bundled_specs()?;
        let Some(spec) = specs.get(name) else {
            let available: Vec<&str> = specs.keys().map(String::as_str).collect();
            bail!(
                "unknown theme {name:?}, available: {}",
                available.join(", ")
            );
        };
        Theme::from_spec(spec).with_context(|| format!("theme {name:?} is invalid"))
    }

    fn from_spec(spec: &ThemeSpec) -> Result<Self> {
        if spec.series.len() < 2 {
            bail!("a theme needs at least two series colors");
        }
        Ok(Theme {
            fg: parse_hex_color(&spec.fg)?,
            border: parse_hex_color(&spec.border)?,
            title: parse_hex_color(&spec.title)?,
            highlight_bg: parse_hex_color(&spec.highlight_bg)?,
            error: parse_hex_color(&spec.error)?,
            series_colors: spec
                .series
                .iter()
                .map(|c| parse_hex_color(c))
                .collect::<Result<_>>()?,
        })
    }

    /// Get style for normal text
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Get style for the entry dialog's input line
    pub fn input_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for validation and error messages
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Get a series color by positional index (cycles through available colors)
    pub fn series_color(&self, index: usize) -> Color {
        self.series_colors[index % self.series_colors.len()]
    }

    /// Get style for a series' bars and legend entry
    pub fn series_style(&self, index: usize) -> Style {
        Style::default().fg(self.series_color(index))
    }
}

/// Parse the bundled theme file.
fn bundled_specs() -> Result<BTreeMap<String, ThemeSpec>> {
    serde_json::from_str(THEMES_JSON).context("bundled themes.json is malformed")
}

/// Parse a "#RRGGBB" hex color into a terminal RGB color.
fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("invalid hex color {hex:?}");
    }
    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;
    Ok(Color::Rgb(r, g, b))
}
