use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::domain::session::Screen;

const CREAM: Color = Color::Rgb(0xF6, 0xF1, 0xE1);
const LETTUCE_LIGHT: Color = Color::Rgb(0xC9, 0xE2, 0xA4);
const LETTUCE_MID: Color = Color::Rgb(0x9C, 0xC5, 0x6E);
const LETTUCE_DARK: Color = Color::Rgb(0x4E, 0x7A, 0x34);
const LETTUCE_DARKEST: Color = Color::Rgb(0x23, 0x3D, 0x1B);

/// Lettuce palette plus the user's accent colour.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Configurable highlight for buttons and focus.
    pub accent: Color,
    /// Light page background.
    pub cream: Color,
    #[allow(missing_docs)]
    pub lettuce_light: Color,
    #[allow(missing_docs)]
    pub lettuce_mid: Color,
    /// Final page background.
    pub lettuce_dark: Color,
    /// Match page background and dark text.
    pub lettuce_darkest: Color,
    /// Whether tachyonfx effects run.
    pub animations: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#7BA05B", true)
    }
}

impl Theme {
    /// Unparseable accents fall back to the mid lettuce green.
    #[must_use]
    pub fn new(accent_color_str: &str, animations: bool) -> Self {
        Self {
            accent: parse_color(accent_color_str),
            cream: CREAM,
            lettuce_light: LETTUCE_LIGHT,
            lettuce_mid: LETTUCE_MID,
            lettuce_dark: LETTUCE_DARK,
            lettuce_darkest: LETTUCE_DARKEST,
            animations,
        }
    }

    /// Page colour behind each screen.
    #[must_use]
    pub const fn background(&self, screen: Screen) -> Color {
        match screen {
            Screen::Final => self.lettuce_dark,
            Screen::Match => self.lettuce_darkest,
            _ => self.cream,
        }
    }

    /// Text colour readable on [`Theme::background`].
    #[must_use]
    pub const fn foreground(&self, screen: Screen) -> Color {
        match screen {
            Screen::Final | Screen::Match => self.cream,
            _ => self.lettuce_darkest,
        }
    }

    /// Page colours for `screen`.
    #[must_use]
    pub fn base_style(&self, screen: Screen) -> Style {
        Style::default()
            .bg(self.background(screen))
            .fg(self.foreground(screen))
    }

    /// Bold page text.
    #[must_use]
    pub fn title_style(&self, screen: Screen) -> Style {
        self.base_style(screen).add_modifier(Modifier::BOLD)
    }

    /// Secondary text such as hints and separators.
    #[must_use]
    pub fn dimmed_style(&self, screen: Screen) -> Style {
        self.base_style(screen).add_modifier(Modifier::DIM)
    }

    /// Filled pill used for buttons such as "go!".
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default()
            .bg(self.lettuce_light)
            .fg(self.lettuce_dark)
            .add_modifier(Modifier::BOLD)
    }
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    LETTUCE_MID
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1].repeat(2), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[1..2].repeat(2), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[2..3].repeat(2), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("lightgreen"), Color::LightGreen);
        assert_eq!(parse_color("#7BA05B"), Color::Rgb(0x7B, 0xA0, 0x5B));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("not-a-color"), LETTUCE_MID);
    }

    #[test]
    fn test_screen_backgrounds() {
        let theme = Theme::default();
        assert_eq!(theme.background(Screen::Landing), CREAM);
        assert_eq!(theme.background(Screen::Recommendation), CREAM);
        assert_eq!(theme.background(Screen::Match), LETTUCE_DARKEST);
        assert_eq!(theme.background(Screen::Final), LETTUCE_DARK);
        assert_eq!(theme.foreground(Screen::Match), CREAM);
    }
}
