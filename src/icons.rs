//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Event row icons
#[derive(Debug, Clone)]
pub struct EventIcons {
    pub bullet: &'static str,
    pub liked: &'static str,
    pub unliked: &'static str,
    pub today: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub events_title: &'static str,
    pub featured_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub search: &'static str,
}

/// Event metadata icons
#[derive(Debug, Clone)]
pub struct MetadataIcons {
    pub clock: &'static str,
    pub location: &'static str,
    pub link: &'static str,
    pub tag: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub event: EventIcons,
    pub ui: UiIcons,
    pub metadata: MetadataIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            event: EventIcons {
                bullet: "🔘",
                liked: "❤️",
                unliked: "🤍",
                today: "📅",
            },
            ui: UiIcons {
                events_title: "📋",
                featured_title: "⭐",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                search: "🔍",
            },
            metadata: MetadataIcons {
                clock: "⏳",
                location: "📍",
                link: "🔗",
                tag: "🏷️",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            event: EventIcons {
                bullet: "●",
                liked: "♥",
                unliked: "♡",
                today: "◷",
            },
            ui: UiIcons {
                events_title: "▶",
                featured_title: "★",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
                search: "⌕",
            },
            metadata: MetadataIcons {
                clock: "⧖",
                location: "◉",
                link: "↗",
                tag: "◈",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            event: EventIcons {
                bullet: "o",
                liked: "*",
                unliked: "-",
                today: "@",
            },
            ui: UiIcons {
                events_title: ">",
                featured_title: "*",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
                search: "/",
            },
            metadata: MetadataIcons {
                clock: "T",
                location: "@",
                link: "~",
                tag: "#",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn bullet(&self) -> &'static str {
        self.icons().event.bullet
    }

    #[must_use]
    pub fn heart_liked(&self) -> &'static str {
        self.icons().event.liked
    }

    #[must_use]
    pub fn heart_unliked(&self) -> &'static str {
        self.icons().event.unliked
    }

    #[must_use]
    pub fn today(&self) -> &'static str {
        self.icons().event.today
    }

    #[must_use]
    pub fn events_title(&self) -> &'static str {
        self.icons().ui.events_title
    }

    #[must_use]
    pub fn featured_title(&self) -> &'static str {
        self.icons().ui.featured_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn clock(&self) -> &'static str {
        self.icons().metadata.clock
    }

    #[must_use]
    pub fn location(&self) -> &'static str {
        self.icons().metadata.location
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        self.icons().metadata.link
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.icons().metadata.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_emoji_icons() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.heart_liked(), "❤️");
        assert_eq!(service.heart_unliked(), "🤍");
        assert_eq!(service.bullet(), "🔘");
    }

    #[test]
    fn test_unicode_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.heart_liked(), "♥");
        assert_eq!(service.heart_unliked(), "♡");
        assert_eq!(service.bullet(), "●");
    }

    #[test]
    fn test_ascii_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.heart_liked(), "*");
        assert_eq!(service.heart_unliked(), "-");
        assert_eq!(service.bullet(), "o");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
