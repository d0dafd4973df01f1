//! Title banner at the top of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::App, ui::components::Component};

pub const TITLE: &str = "App Generator";
pub const TAGLINE: &str = "Describe your dream app and watch it come to life";

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let lines = vec![
            Line::from(Span::styled(TITLE, theme.accent_emphasis_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(TAGLINE, theme.text_secondary_style())),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), rect);
    }
}
