//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates [`ForgeTheme`](super::ForgeTheme) with indexed colors so the
//! screen stays legible in macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(238),
                border: Color::Indexed(238),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(252),
                text_muted: Color::Indexed(246),

                accent_primary: Color::Indexed(135),
                accent_secondary: Color::Indexed(69),

                info: Color::Indexed(69),
                success: Color::Indexed(41),
                warning: Color::Indexed(214),
                error: Color::Indexed(203),

                focus: Color::Indexed(205),
                toast_bg: Color::Indexed(34),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
