//! Deploy banner drawn over the top-right corner while visible.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th, utils::top_right_rect},
};

#[derive(Debug, Default)]
pub struct ToastComponent;

impl Component for ToastComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        if !app.notification.is_visible() {
            return;
        }
        let theme = &*app.ctx.theme;
        let message = app.notification.message();
        let width = message.width() as u16 + 6;
        let area = top_right_rect(rect, width, 3, 1);

        let style = th::toast_style(theme);
        let toast = Paragraph::new(message)
            .centered()
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(style));
        frame.render_widget(Clear, area);
        frame.render_widget(toast, area);
    }
}
