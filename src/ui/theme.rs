use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::entry::{Category, Rarity};

/// Theme configuration for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Theme name for identification
    pub name: String,

    /// Primary accent color (borders, highlights)
    pub primary: String,

    /// Secondary accent color (showcase, badges)
    pub secondary: String,

    /// Success/playing state color
    pub success: String,

    /// Warning/selected state color
    pub warning: String,

    /// Error state color
    pub error: String,

    /// Primary text color
    pub text: String,

    /// Secondary/muted text color
    pub text_muted: String,

    /// Border color for focused elements
    pub border_focused: String,

    /// Border color for normal elements
    pub border_normal: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            primary: "Cyan".to_string(),
            secondary: "Magenta".to_string(),
            success: "Green".to_string(),
            warning: "Yellow".to_string(),
            error: "Red".to_string(),
            text: "White".to_string(),
            text_muted: "Gray".to_string(),
            border_focused: "Cyan".to_string(),
            border_normal: "DarkGray".to_string(),
        }
    }
}

impl Theme {
    /// Parse a color string to ratatui Color
    pub fn parse_color(color_str: &str) -> Color {
        match color_str.trim() {
            "Reset" => Color::Reset,
            "Black" => Color::Black,
            "Red" => Color::Red,
            "Green" => Color::Green,
            "Yellow" => Color::Yellow,
            "Blue" => Color::Blue,
            "Magenta" => Color::Magenta,
            "Cyan" => Color::Cyan,
            "Gray" | "Grey" => Color::Gray,
            "DarkGray" | "DarkGrey" => Color::DarkGray,
            "LightRed" => Color::LightRed,
            "LightGreen" => Color::LightGreen,
            "LightYellow" => Color::LightYellow,
            "LightBlue" => Color::LightBlue,
            "LightMagenta" => Color::LightMagenta,
            "LightCyan" => Color::LightCyan,
            "White" => Color::White,
            s if s.starts_with('#') => {
                if let Some((r, g, b)) = parse_hex_color(s) {
                    Color::Rgb(r, g, b)
                } else {
                    Color::Reset
                }
            }
            s => {
                if let Ok(index) = s.parse::<u8>() {
                    Color::Indexed(index)
                } else {
                    Color::Reset
                }
            }
        }
    }

    // Color accessors
    pub fn primary(&self) -> Color {
        Self::parse_color(&self.primary)
    }

    pub fn secondary(&self) -> Color {
        Self::parse_color(&self.secondary)
    }

    pub fn success(&self) -> Color {
        Self::parse_color(&self.success)
    }

    pub fn warning(&self) -> Color {
        Self::parse_color(&self.warning)
    }

    pub fn error(&self) -> Color {
        Self::parse_color(&self.error)
    }

    pub fn text(&self) -> Color {
        Self::parse_color(&self.text)
    }

    pub fn text_muted(&self) -> Color {
        Self::parse_color(&self.text_muted)
    }

    pub fn border_focused(&self) -> Color {
        Self::parse_color(&self.border_focused)
    }

    pub fn border_normal(&self) -> Color {
        Self::parse_color(&self.border_normal)
    }

    // Style helpers
    pub fn entry_style(&self, is_selected: bool, is_playing: bool) -> Style {
        match (is_selected, is_playing) {
            (true, true) => Style::default()
                .fg(self.success())
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(self.warning())
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(self.success()),
            (false, false) => Style::default(),
        }
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.warning())
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused())
        } else {
            Style::default().fg(self.border_normal())
        }
    }
}

/// Accent color for a creature category, matching the catalog's palette
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Passive => Color::Rgb(0x55, 0xff, 0x55),
        Category::Neutral => Color::Rgb(0xff, 0xaa, 0x00),
        Category::Hostile => Color::Rgb(0xff, 0x55, 0x55),
        Category::Boss => Color::Rgb(0xaa, 0x00, 0xaa),
        Category::Utility => Color::Rgb(0x55, 0x55, 0xff),
    }
}

/// Text color for a rarity tier
pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::LightBlue,
        Rarity::Legendary => Color::Yellow,
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
