//! Feature cards shown before the first generation.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct FeaturesComponent;

impl FeaturesComponent {
    /// `(icon, heading, blurb)` for each card.
    pub fn cards(deploy_target: &str) -> [(&'static str, &'static str, String); 3] {
        [
            ("⚡", "Lightning Fast", "Generate production-ready apps in seconds".to_string()),
            ("🎨", "Beautiful UI", "Modern, responsive designs out of the box".to_string()),
            ("🚀", "Deploy Instantly", format!("One-click deployment to {deploy_target}")),
        ]
    }
}

impl Component for FeaturesComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [row, _] = Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(rect);
        let areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(row);

        for ((icon, heading, blurb), area) in Self::cards(&app.ctx.config.deploy_target).into_iter().zip(areas) {
            let card = Paragraph::new(vec![
                Line::from(icon),
                Line::from(Span::styled(heading, theme.text_primary_style().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(blurb, theme.text_muted_style())),
            ])
            .wrap(Wrap { trim: true })
            .block(th::block(theme, None, false));
            frame.render_widget(card, area);
        }
    }
}
