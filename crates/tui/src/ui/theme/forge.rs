use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Slate surfaces with a purple -> blue accent pair
pub const SLATE_950: Color = Color::Rgb(0x02, 0x06, 0x17); // #020617
pub const SLATE_900: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0f172a
pub const SLATE_700: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155
pub const SLATE_400: Color = Color::Rgb(0x94, 0xA3, 0xB8); // #94a3b8
pub const SLATE_300: Color = Color::Rgb(0xCB, 0xD5, 0xE1); // #cbd5e1
pub const SLATE_50: Color = Color::Rgb(0xF8, 0xFA, 0xFC); // #f8fafc

pub const PURPLE: Color = Color::Rgb(0xA8, 0x55, 0xF7); // #a855f7
pub const BLUE: Color = Color::Rgb(0x3B, 0x82, 0xF6); // #3b82f6
pub const PINK: Color = Color::Rgb(0xEC, 0x48, 0x99); // #ec4899
pub const GREEN: Color = Color::Rgb(0x22, 0xC5, 0x5E); // #22c55e
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B); // #f59e0b
pub const RED: Color = Color::Rgb(0xEF, 0x44, 0x44); // #ef4444
pub const GREEN_600: Color = Color::Rgb(0x16, 0xA3, 0x4A); // #16a34a

/// Default truecolor theme.
#[derive(Debug, Clone)]
pub struct ForgeTheme {
    roles: ThemeRoles,
}

impl ForgeTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: SLATE_950,
                surface: SLATE_900,
                surface_muted: SLATE_700,
                border: SLATE_700,

                text: SLATE_50,
                text_secondary: SLATE_300,
                text_muted: SLATE_400,

                accent_primary: PURPLE,
                accent_secondary: BLUE,

                info: BLUE,
                success: GREEN,
                warning: AMBER,
                error: RED,

                focus: PINK,
                toast_bg: GREEN_600,
            },
        }
    }
}

impl Default for ForgeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for ForgeTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
