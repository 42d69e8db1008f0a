//! UI Theme - Design system constants
//!
//! This module defines all visual elements used by the renderer:
//! - Colors for the title bar, log severities, and bar cells
//! - Bar glyphs (filled / empty / tip)
//!
//! Centralizing these makes it easy to keep the display consistent and to
//! swap color schemes later.

use crossterm::style::Color;

/// Default theme for the status display
#[derive(Debug, Clone)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Bar cell glyphs
    pub glyphs: BarGlyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            glyphs: BarGlyphs::default(),
        }
    }
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Title bar text
    pub title_fg: Color,
    /// Title bar background
    pub title_bg: Color,
    /// Informational log lines
    pub info: Color,
    /// Warning log lines
    pub warning: Color,
    /// Error log lines
    pub error: Color,
    /// Filled bar cells
    pub bar_filled: Color,
    /// Empty bar cells
    pub bar_empty: Color,
    /// Secondary text (stats row)
    pub secondary: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            title_fg: Color::White,
            title_bg: Color::Cyan,
            info: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            bar_filled: Color::Green,
            bar_empty: Color::Red,
            secondary: Color::DarkGrey,
        }
    }
}

/// Glyphs used to draw the progress bar cells
#[derive(Debug, Clone)]
pub struct BarGlyphs {
    /// Filled cell (▓)
    pub filled: &'static str,
    /// Empty cell (░)
    pub empty: &'static str,
    /// Progress tip cell drawn at the fill boundary (▓)
    pub tip: &'static str,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self {
            filled: "▓",
            empty: "░",
            tip: "▓",
        }
    }
}

/// Format bytes for human-readable display
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb >= 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else if kb >= 1024.0 {
        format!("{mb:.1} MB")
    } else if kb >= 1.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{bytes} B")
    }
}
