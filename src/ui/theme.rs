//! # Theme System
//!
//! Color themes for the list TUI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! the role fields of the active [`Theme`]. Pressing `t` cycles through the
//! built-in themes and the choice is written to the user config.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// Colors used by the list TUI, grouped by role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Background for every panel.
    pub bg: Color,
    /// Item labels and body text.
    pub fg: Color,
    /// Instruction line, footer and the "no items" indicator.
    pub fg_dim: Color,

    /// Heading text and focused borders.
    pub accent: Color,
    /// Label emphasis in the summary line.
    pub secondary: Color,

    /// Foreground of the active row.
    pub active_fg: Color,
    /// Background of the active row.
    pub active_bg: Color,
}

impl Theme {
    /// All built-in themes in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping to the first.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),             // base
        fg: Color::Rgb(205, 214, 244),          // text
        fg_dim: Color::Rgb(108, 112, 134),      // overlay0
        accent: Color::Rgb(137, 180, 250),      // blue
        secondary: Color::Rgb(249, 226, 175),   // yellow
        active_fg: Color::Rgb(30, 30, 46),      // base
        active_bg: Color::Rgb(137, 180, 250),   // blue
    },
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),          // base
        fg: Color::Rgb(76, 79, 105),            // text
        fg_dim: Color::Rgb(156, 160, 176),      // overlay0
        accent: Color::Rgb(30, 102, 245),       // blue
        secondary: Color::Rgb(223, 142, 29),    // yellow
        active_fg: Color::Rgb(239, 241, 245),   // base
        active_bg: Color::Rgb(30, 102, 245),    // blue
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),      // purple
        secondary: Color::Rgb(241, 250, 140),   // yellow
        active_fg: Color::Rgb(40, 42, 54),
        active_bg: Color::Rgb(139, 233, 253),   // cyan
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),      // frost
        secondary: Color::Rgb(235, 203, 139),   // yellow
        active_fg: Color::Rgb(46, 52, 64),
        active_bg: Color::Rgb(129, 161, 193),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),      // blue
        secondary: Color::Rgb(250, 189, 47),    // yellow
        active_fg: Color::Rgb(40, 40, 40),
        active_bg: Color::Rgb(184, 187, 38),    // green
    },
];
