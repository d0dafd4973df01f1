//! Prompt panel: single-line editor plus the generate button.
//!
//! Edits go to [`App::prompt_input`] first and are then forwarded to the
//! controller with `Msg::EditPrompt`. While a generation is running the
//! editor is read-only, matching the disabled button.

use appforge_types::{Effect, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{App, MainFocus},
    ui::{components::Component, theme::theme_helpers as th},
};

pub const PROMPT_TITLE: &str = "What app do you want to build?";
pub const PLACEHOLDER: &str =
    "Example: A todo list app with drag and drop functionality, dark mode, and local storage...";

static FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default)]
pub struct PromptComponent;

impl PromptComponent {
    /// Label for the generate button in the current state.
    pub fn button_label(app: &App) -> String {
        if app.is_generating() {
            format!("{} Generating Your App...", FRAMES[app.throbber_idx % FRAMES.len()])
        } else {
            "✨ Generate App".to_string()
        }
    }

    fn sync_prompt(app: &mut App) -> Vec<Effect> {
        let text = app.prompt_input.input().to_string();
        app.update(&Msg::EditPrompt(text))
    }
}

impl Component for PromptComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Enter {
            return app.update(&Msg::Generate);
        }
        if app.is_generating() {
            return Vec::new();
        }

        let input = &mut app.prompt_input;
        let edited = match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                input.insert_char(c);
                true
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_home();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            _ => false,
        };

        if edited { Self::sync_prompt(app) } else { Vec::new() }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.focus == MainFocus::Prompt;
        let block = th::block(theme, Some(PROMPT_TITLE), focused);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [input_area, _, button_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let input = &app.prompt_input;
        let width = input_area.width as usize;
        let cursor_columns = input.cursor_columns();
        let horizontal_scroll = cursor_columns.saturating_sub(width.saturating_sub(1));

        let line = if input.input().is_empty() {
            Line::from(Span::styled(PLACEHOLDER, theme.text_muted_style()))
        } else {
            let style = if app.is_generating() {
                theme.text_muted_style()
            } else {
                theme.text_primary_style()
            };
            Line::from(Span::styled(input.input().to_string(), style))
        };
        frame.render_widget(Paragraph::new(line).scroll((0, horizontal_scroll as u16)), input_area);

        if focused && !app.is_generating() {
            let x = input_area.x + (cursor_columns - horizontal_scroll) as u16;
            frame.set_cursor_position(Position::new(x, input_area.y));
        }

        th::render_button(frame, button_area, &Self::button_label(app), app.controller.can_generate(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_types::GenerationPhase;
    use appforge_util::ForgeConfig;

    fn press(component: &mut PromptComponent, app: &mut App, code: KeyCode) -> Vec<Effect> {
        component.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(component: &mut PromptComponent, app: &mut App, text: &str) {
        for c in text.chars() {
            press(component, app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_controller_prompt() {
        let mut app = App::new(ForgeConfig::default());
        let mut prompt = PromptComponent;
        type_text(&mut prompt, &mut app, "Chat app");
        press(&mut prompt, &mut app, KeyCode::Home);
        press(&mut prompt, &mut app, KeyCode::Delete);

        assert_eq!(app.controller.prompt(), "hat app");
        assert_eq!(app.prompt_input.cursor(), 0);
    }

    #[test]
    fn enter_starts_generation_and_locks_editor() {
        let mut app = App::new(ForgeConfig::default());
        let mut prompt = PromptComponent;
        type_text(&mut prompt, &mut app, "Notes");

        let effects = press(&mut prompt, &mut app, KeyCode::Enter);
        assert!(matches!(effects.as_slice(), [Effect::StartGeneration(ticket)] if ticket.prompt == "Notes"));
        assert_eq!(app.phase(), GenerationPhase::Generating);

        type_text(&mut prompt, &mut app, "!!");
        assert_eq!(app.controller.prompt(), "Notes");
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let mut app = App::new(ForgeConfig::default());
        let mut prompt = PromptComponent;
        prompt.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(app.controller.prompt(), "");
    }

    #[test]
    fn button_label_follows_phase() {
        let mut app = App::new(ForgeConfig::default());
        assert_eq!(PromptComponent::button_label(&app), "✨ Generate App");

        app.update(&Msg::EditPrompt("Timer".into()));
        app.update(&Msg::Generate);
        app.update(&Msg::Tick);
        assert_eq!(PromptComponent::button_label(&app), "⠙ Generating Your App...");
    }
}
