use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Root background behind every panel.
pub fn app_background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().bg(theme.roles().background)
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    if enabled {
        let ThemeRoles {
            accent_primary, text, ..
        } = *theme.roles();
        Style::default().bg(accent_primary).fg(text).add_modifier(Modifier::BOLD)
    } else {
        let ThemeRoles {
            surface_muted,
            text_muted,
            ..
        } = *theme.roles();
        Style::default().bg(surface_muted).fg(text_muted)
    }
}

/// Toast body: filled, bold, high contrast.
pub fn toast_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { toast_bg, text, .. } = *theme.roles();
    Style::default().bg(toast_bg).fg(text).add_modifier(Modifier::BOLD)
}

/// Renders a single-line filled button centered in `area`.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, is_enabled: bool, theme: &T) {
    frame.render_widget(
        Paragraph::new(label.to_string())
            .centered()
            .style(button_primary_style(theme, is_enabled)),
        area,
    );
}
