//! Generated app view: info, preview placeholder, code listing, and the
//! deploy call to action.

use appforge_types::Effect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::{App, MainFocus},
    ui::{components::Component, theme::theme_helpers as th},
};

const PAGE: i32 = 10;

#[derive(Debug, Default)]
pub struct ResultComponent;

impl Component for ResultComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => app.scroll_code(-1),
            KeyCode::Down => app.scroll_code(1),
            KeyCode::PageUp => app.scroll_code(-PAGE),
            KeyCode::PageDown => app.scroll_code(PAGE),
            KeyCode::Home => app.scroll_code(i32::MIN / 2),
            KeyCode::End => app.scroll_code(i32::MAX / 2),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let Some(generated) = app.controller.result() else {
            return;
        };

        let [info_area, preview_area, code_area, deploy_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(rect);

        let info = Paragraph::new(vec![
            Line::from(Span::styled(
                generated.title.as_str(),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(generated.description.as_str(), theme.text_secondary_style())),
        ])
        .wrap(Wrap { trim: true })
        .block(th::block(theme, None, false));
        frame.render_widget(info, info_area);

        let preview = Paragraph::new(vec![
            Line::from("🎨"),
            Line::from(Span::styled("Your App Preview", theme.text_primary_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled("Fully responsive and production-ready", theme.text_secondary_style())),
        ])
        .centered()
        .block(th::block(theme, Some("Live Preview"), false));
        frame.render_widget(preview, preview_area);

        let focused = app.focus == MainFocus::Code;
        let copy_hint = Line::from(vec![
            Span::styled(" Copy Code ", theme.accent_secondary_style()),
            Span::styled("Ctrl+Y ", theme.text_muted_style()),
        ])
        .alignment(Alignment::Right);
        let code = Paragraph::new(generated.code.as_str())
            .style(theme.status_success())
            .scroll((app.code_scroll, 0))
            .block(th::block(theme, Some("Generated Code"), focused).title(copy_hint));
        frame.render_widget(code, code_area);

        let deploy = Line::from(vec![
            Span::styled(
                format!("▲ Deploy to {}", app.ctx.deployer.target()),
                theme.accent_emphasis_style(),
            ),
            Span::styled("  Ctrl+D", theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(deploy).centered(), deploy_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_types::Msg;
    use appforge_util::ForgeConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn generated_app(prompt: &str) -> App {
        let mut app = App::new(ForgeConfig::default());
        app.update(&Msg::EditPrompt(prompt.into()));
        let ticket = match app.update(&Msg::Generate).pop() {
            Some(Effect::StartGeneration(ticket)) => ticket,
            other => panic!("unexpected effect {other:?}"),
        };
        app.update(&Msg::GenerationCompleted(appforge_types::GenerationOutcome {
            token: ticket.token,
            app: appforge_engine::synthesize(&ticket.prompt),
        }));
        app
    }

    #[test]
    fn end_and_home_jump_through_listing() {
        let mut app = generated_app("Expense tracker");
        let mut view = ResultComponent;
        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert!(app.code_scroll > 0);
        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert_eq!(app.code_scroll, 0);
    }

    #[test]
    fn renders_title_and_deploy_target() {
        let mut app = generated_app("A todo list app");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ResultComponent.render(frame, area, &mut app);
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("A todo list app"));
        assert!(rendered.contains("Deploy to Vercel"));
        assert!(rendered.contains("Generated Code"));
    }
}
