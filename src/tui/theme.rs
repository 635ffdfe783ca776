use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xD0, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x5E, 0x6A, 0x7A),
            highlight: Color::Rgb(0x3E, 0xB4, 0x89),
            green: Color::Rgb(0x3E, 0xB4, 0x89),
            red: Color::Rgb(0xE0, 0x5A, 0x5A),
            yellow: Color::Rgb(0xE6, 0xC0, 0x45),
            selection_bg: Color::Rgb(0x20, 0x30, 0x2A),
            search_match_bg: Color::Rgb(0xE6, 0xC0, 0x45),
            search_match_fg: Color::Rgb(0x10, 0x14, 0x1C),
        }
    }
}

/// Parse a hex color string like "#3EB489" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn config_overrides_apply() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#FF8800".to_string());
        colors.insert("unknown".to_string(), "#112233".to_string());
        let ui = UiConfig { colors };

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0xFF, 0x88, 0x00));
        // Everything else stays default
        assert_eq!(theme.background, Theme::default().background);
    }
}
