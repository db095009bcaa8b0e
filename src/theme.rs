//! Color schemes for the UI
//!
//! All widgets pull their colors from a single [`Theme`] so the whole
//! interface flips between the dark and light palettes at runtime. The
//! active scheme persists with the rest of the UI state.

use ratatui::style::{Color, Modifier, Style};

/// Selectable color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

impl ColorScheme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Hint text naming the action the toggle key performs
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Dark => "Brighten",
            Self::Light => "Darken",
        }
    }
}

/// Resolved style palette for the active scheme
#[derive(Debug, Clone)]
pub struct Theme {
    pub scheme: ColorScheme,
    /// Frame background painted under every widget
    pub base: Style,
    pub text: Style,
    pub dim: Style,
    pub accent: Style,
    pub divider: Style,
    pub today: Style,
    pub heart: Style,
    pub tag: Style,
    pub selection: Style,
    pub border: Style,
    pub title: Style,
    pub link: Style,
    pub error: Style,
    pub countdown: Style,
    pub tooltip: Style,
    pub status_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorScheme::Dark)
    }
}

impl Theme {
    pub fn new(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            base: Style::default().fg(Color::White).bg(Color::Black),
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan),
            divider: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            today: Style::default()
                .fg(Color::Rgb(255, 165, 0))
                .add_modifier(Modifier::BOLD),
            heart: Style::default().fg(Color::Red),
            tag: Style::default().fg(Color::Magenta),
            selection: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            error: Style::default().fg(Color::Red),
            countdown: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            tooltip: Style::default().fg(Color::White).bg(Color::DarkGray),
            status_bar: Style::default().fg(Color::Gray),
        }
    }

    fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            base: Style::default().fg(Color::Black).bg(Color::White),
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            accent: Style::default().fg(Color::Blue),
            divider: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            today: Style::default()
                .fg(Color::Rgb(200, 90, 0))
                .add_modifier(Modifier::BOLD),
            heart: Style::default().fg(Color::Red),
            tag: Style::default().fg(Color::Magenta),
            selection: Style::default()
                .bg(Color::Rgb(200, 220, 240))
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            title: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            error: Style::default().fg(Color::Red),
            countdown: Style::default()
                .fg(Color::Rgb(160, 120, 0))
                .add_modifier(Modifier::BOLD),
            tooltip: Style::default().fg(Color::Black).bg(Color::Rgb(235, 235, 215)),
            status_bar: Style::default().fg(Color::DarkGray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_flag() {
        assert_eq!(ColorScheme::from_dark_flag(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark_flag(false), ColorScheme::Light);
    }

    #[test]
    fn test_toggled_flips_scheme() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
    }

    #[test]
    fn test_toggle_label_names_the_target() {
        assert_eq!(ColorScheme::Dark.toggle_label(), "Brighten");
        assert_eq!(ColorScheme::Light.toggle_label(), "Darken");
    }

    #[test]
    fn test_theme_matches_scheme() {
        assert_eq!(Theme::new(ColorScheme::Dark).scheme, ColorScheme::Dark);
        assert_eq!(Theme::new(ColorScheme::Light).scheme, ColorScheme::Light);
        assert!(Theme::default().scheme.is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Theme::new(ColorScheme::Dark);
        let light = Theme::new(ColorScheme::Light);
        assert_ne!(dark.base, light.base);
        assert_ne!(dark.text, light.text);
    }
}
