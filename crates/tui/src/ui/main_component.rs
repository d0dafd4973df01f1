use appforge_types::{Effect, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::Block,
};

use super::components::{
    Component, FeaturesComponent, HeaderComponent, HintBarComponent, LogsComponent, PromptComponent,
    ResultComponent, ToastComponent,
};
use super::theme::theme_helpers as th;
use super::utils::centered_column;
use crate::app::{App, MainFocus};

/// Widest the content column grows on large terminals.
const MAX_CONTENT_WIDTH: u16 = 110;

/// What the runtime should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue(Vec<Effect>),
    Quit,
}

/// Root view: owns every component and routes input between them.
#[derive(Debug, Default)]
pub struct MainView {
    header: HeaderComponent,
    prompt: PromptComponent,
    result: ResultComponent,
    features: FeaturesComponent,
    logs: LogsComponent,
    hints: HintBarComponent,
    toast: ToastComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards an application message to [`App::update`].
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Global shortcuts first, then the focused component.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue(Vec::new());
        }
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let effects = match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if control => return KeyOutcome::Quit,
            KeyCode::Char('y') if control => self.handle_message(app, Msg::CopyCode),
            KeyCode::Char('d') if control => self.handle_message(app, Msg::Deploy),
            KeyCode::Esc => self.handle_message(app, Msg::DismissNotification),
            KeyCode::Tab | KeyCode::BackTab => {
                app.toggle_focus();
                Vec::new()
            }
            _ => match app.focus {
                MainFocus::Code if app.result().is_some() => self.result.handle_key_events(app, key),
                _ => self.prompt.handle_key_events(app, key),
            },
        };
        KeyOutcome::Continue(effects)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::app_background_style(&*app.ctx.theme)), area);

        let column = centered_column(area, MAX_CONTENT_WIDTH);
        let [header, prompt, body, logs, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .areas(column);

        self.header.render(frame, header, app);
        self.prompt.render(frame, prompt, app);
        if app.result().is_some() {
            self.result.render(frame, body, app);
        } else if !app.is_generating() {
            self.features.render(frame, body, app);
        }
        self.logs.render(frame, logs, app);
        self.hints.render(frame, hints, app);

        // Overlay last so it sits above everything else.
        self.toast.render(frame, area, app);
    }
}
