//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Admin toggle icons
#[derive(Debug, Clone)]
pub struct AdminIcons {
    pub locked: &'static str,
    pub unlocked: &'static str,
}

/// Per-card action icons shown in admin mode
#[derive(Debug, Clone)]
pub struct CardIcons {
    pub enhance: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub image: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub warning: &'static str,
    pub menu: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub admin: AdminIcons,
    pub card: CardIcons,
    pub ui: UiIcons,
    pub spinner: &'static [&'static str],
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
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

    fn emoji_icons() -> IconSet {
        IconSet {
            admin: AdminIcons {
                locked: "🔒",
                unlocked: "🔓",
            },
            card: CardIcons {
                enhance: "✨",
                edit: "✏️",
                delete: "🗑️",
                image: "🖼️",
            },
            ui: UiIcons {
                warning: "⚠️",
                menu: "☰",
            },
            spinner: &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            admin: AdminIcons {
                locked: "⊘",
                unlocked: "◎",
            },
            card: CardIcons {
                enhance: "✦",
                edit: "✎",
                delete: "✗",
                image: "▣",
            },
            ui: UiIcons {
                warning: "⚠",
                menu: "≡",
            },
            spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            admin: AdminIcons {
                locked: "[L]",
                unlocked: "[U]",
            },
            card: CardIcons {
                enhance: "*",
                edit: "e",
                delete: "x",
                image: "@",
            },
            ui: UiIcons {
                warning: "!",
                menu: "=",
            },
            spinner: &["|", "/", "-", "\\"],
        }
    }

    #[must_use]
    pub fn admin_locked(&self) -> &'static str {
        self.icons().admin.locked
    }

    #[must_use]
    pub fn admin_unlocked(&self) -> &'static str {
        self.icons().admin.unlocked
    }

    #[must_use]
    pub fn enhance(&self) -> &'static str {
        self.icons().card.enhance
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().card.edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().card.delete
    }

    #[must_use]
    pub fn image(&self) -> &'static str {
        self.icons().card.image
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().ui.menu
    }

    /// Spinner frame for an animation step; wraps around
    #[must_use]
    pub fn spinner_frame(&self, step: usize) -> &'static str {
        let frames = self.icons().spinner;
        frames[step % frames.len()]
    }
}
