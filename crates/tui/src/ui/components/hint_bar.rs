//! Hint bar component for keyboard shortcuts.
//!
//! Renders the single-line strip at the bottom of the screen. Hints that do
//! nothing in the current state (copying without a result, say) are left
//! out.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{App, MainFocus},
    ui::components::Component,
};

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl HintBarComponent {
    fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::with_capacity(7);
        if app.controller.can_generate() {
            hints.push(("Enter", " generate  "));
        }
        if app.result().is_some() {
            hints.push(("Tab", " focus  "));
            if app.focus == MainFocus::Code {
                hints.push(("↑/↓ PgUp/PgDn", " scroll  "));
            }
            hints.push(("Ctrl+Y", " copy  "));
        }
        hints.push(("Ctrl+D", " deploy  "));
        if app.notification.is_visible() {
            hints.push(("Esc", " dismiss  "));
        }
        hints.push(("Ctrl+Q", " quit"));
        hints
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let spans: Vec<Span> = Self::hints(app)
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(key, theme.accent_emphasis_style()),
                    Span::styled(label, theme.text_muted_style()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.text_muted_style()), rect);
    }
}
