//! Application state and logic for the AppForge TUI.
//!
//! [`App`] is the single owner of screen state. Input handlers and finished
//! background tasks are funneled through [`App::update`], which mutates state
//! and returns the [`Effect`]s the command layer should perform.

use std::collections::VecDeque;
use std::sync::Arc;

use appforge_engine::{DeploymentClient, NotificationTimer, SimulatedDeploymentClient, WorkflowController};
use appforge_types::{Effect, GeneratedApp, GenerationPhase, Msg};
use appforge_util::ForgeConfig;
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::ui::components::common::TextInputState;
use crate::ui::theme::{self, Theme};

/// Upper bound on retained activity log entries.
pub const MAX_LOG_ENTRIES: usize = 500;

/// Number of frames in the generate button throbber.
pub const THROBBER_FRAME_COUNT: usize = 10;

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like configuration, the deployment client,
/// and the active theme.
pub struct SharedCtx {
    pub config: ForgeConfig,
    pub deployer: Arc<dyn DeploymentClient>,
    pub theme: Box<dyn Theme>,
}

impl SharedCtx {
    pub fn new(config: ForgeConfig) -> Self {
        let deployer = Arc::new(SimulatedDeploymentClient::new(config.deploy_target.clone()));
        Self::with_deployer(config, deployer)
    }

    pub fn with_deployer(config: ForgeConfig, deployer: Arc<dyn DeploymentClient>) -> Self {
        Self {
            config,
            deployer,
            theme: theme::load(),
        }
    }
}

/// A timestamped activity log line.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

/// Bounded activity log; the oldest entries are dropped first.
#[derive(Debug, Default)]
pub struct LogsState {
    entries: VecDeque<LogEntry>,
}

impl LogsState {
    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainFocus {
    /// The prompt editor
    #[default]
    Prompt,
    /// The generated code listing
    Code,
}

/// The main application state.
pub struct App {
    /// Shared, cross-cutting context (config, deployer, theme)
    pub ctx: SharedCtx,
    /// Generation state machine; owns the prompt and the result
    pub controller: WorkflowController,
    /// Deploy banner with auto-dismiss
    pub notification: NotificationTimer,
    /// Editing buffer for the prompt panel
    pub prompt_input: TextInputState,
    /// Activity log shown under the main content
    pub logs: LogsState,
    /// Focused panel
    pub focus: MainFocus,
    /// Animation frame for the generate button throbber
    pub throbber_idx: usize,
    /// First visible line of the generated code
    pub code_scroll: u16,
}

impl App {
    pub fn new(config: ForgeConfig) -> Self {
        Self::with_ctx(SharedCtx::new(config))
    }

    pub fn with_ctx(ctx: SharedCtx) -> Self {
        let controller = WorkflowController::new(ctx.config.generation_latency());
        let notification = NotificationTimer::deploying_to(&ctx.config.deploy_target, ctx.config.notification_duration());
        let mut logs = LogsState::default();
        logs.push("Describe an app and press Enter to generate it");
        Self {
            ctx,
            controller,
            notification,
            prompt_input: TextInputState::new(),
            logs,
            focus: MainFocus::default(),
            throbber_idx: 0,
            code_scroll: 0,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.controller.phase()
    }

    pub fn result(&self) -> Option<&GeneratedApp> {
        self.controller.result()
    }

    pub fn is_generating(&self) -> bool {
        self.phase() == GenerationPhase::Generating
    }

    /// Moves focus between the prompt and the code listing.
    ///
    /// The code listing only takes focus while a result is shown.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            MainFocus::Prompt if self.result().is_some() => MainFocus::Code,
            _ => MainFocus::Prompt,
        };
    }

    /// Scrolls the code listing by `delta` lines, clamped to the listing.
    pub fn scroll_code(&mut self, delta: i32) {
        let Some(app) = self.result() else {
            self.code_scroll = 0;
            return;
        };
        let max = app.code.lines().count().saturating_sub(1) as i32;
        let next = (self.code_scroll as i32 + delta).clamp(0, max.max(0));
        self.code_scroll = next as u16;
    }

    /// Applies a message and returns the effects to run.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::EditPrompt(text) => {
                self.controller.set_prompt(text.as_str());
                if self.prompt_input.input() != text {
                    self.prompt_input.set_input(text.as_str());
                }
            }
            Msg::Generate => {
                if let Some(ticket) = self.controller.generate() {
                    self.logs.push(format!("Generating app for \"{}\"", ticket.prompt.trim()));
                    self.throbber_idx = 0;
                    self.code_scroll = 0;
                    self.focus = MainFocus::Prompt;
                    effects.push(Effect::StartGeneration(ticket));
                }
            }
            Msg::GenerationCompleted(outcome) => {
                if self.controller.complete(outcome.clone()) {
                    self.logs.push(format!("✨ Generated \"{}\"", outcome.app.title));
                    self.code_scroll = 0;
                }
            }
            Msg::Deploy => {
                let ticket = self.notification.trigger();
                effects.push(Effect::ScheduleNotificationHide(ticket));
                match self.result() {
                    Some(app) => {
                        let title = app.title.clone();
                        effects.push(Effect::DeployRequested(app.clone()));
                        self.logs
                            .push(format!("🚀 Deploying \"{title}\" to {}...", self.ctx.deployer.target()));
                    }
                    None => self.logs.push("Nothing generated yet; generate an app before deploying"),
                }
            }
            Msg::DeployFinished(Ok(receipt)) => {
                let suffix = if receipt.simulated { " (simulated)" } else { "" };
                info!(platform = %receipt.target, slug = %receipt.slug, "deploy finished");
                self.logs
                    .push(format!("Deployed {} to {}{suffix}", receipt.slug, receipt.target));
            }
            Msg::DeployFinished(Err(message)) => {
                warn!(error = %message, "deploy failed");
                self.logs.push(format!("Deploy failed: {message}"));
            }
            Msg::CopyCode => {
                if let Some(app) = self.result() {
                    effects.push(Effect::CopyToClipboardRequested(app.code.clone()));
                }
            }
            Msg::NotificationElapsed(token) => {
                self.notification.expire(*token);
            }
            Msg::DismissNotification => {
                if self.notification.is_visible() {
                    self.notification.hide();
                }
            }
            Msg::Tick => {
                if self.is_generating() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAME_COUNT;
                }
            }
            Msg::Resize(..) => {}
            Msg::Log(line) => self.logs.push(line.as_str()),
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_engine::synthesize;
    use appforge_types::{DeployReceipt, GenerationOutcome};
    use std::time::Duration;

    fn test_app() -> App {
        App::new(ForgeConfig::default())
    }

    fn start_generation(app: &mut App, prompt: &str) -> appforge_types::GenerationTicket {
        app.update(&Msg::EditPrompt(prompt.into()));
        match app.update(&Msg::Generate).as_slice() {
            [Effect::StartGeneration(ticket)] => ticket.clone(),
            other => panic!("expected a single StartGeneration, got {other:?}"),
        }
    }

    fn finish(app: &mut App, ticket: &appforge_types::GenerationTicket) {
        let outcome = GenerationOutcome {
            token: ticket.token,
            app: synthesize(&ticket.prompt),
        };
        assert!(app.update(&Msg::GenerationCompleted(outcome)).is_empty());
    }

    #[test]
    fn todo_prompt_runs_idle_generating_generated() {
        let mut app = test_app();
        assert_eq!(app.phase(), GenerationPhase::Idle);

        let ticket = start_generation(&mut app, "A todo list app");
        assert_eq!(ticket.latency, Duration::from_millis(2500));
        assert_eq!(app.phase(), GenerationPhase::Generating);
        assert!(app.result().is_none());

        finish(&mut app, &ticket);
        assert_eq!(app.phase(), GenerationPhase::Generated);
        let result = app.result().expect("result");
        assert_eq!(result.title, "A todo list app");
        assert!(result.description.contains("a todo list app"));
        assert!(result.code.contains("A todo list app"));
    }

    #[test]
    fn whitespace_prompt_emits_nothing() {
        let mut app = test_app();
        app.update(&Msg::EditPrompt("  ".into()));
        assert!(app.update(&Msg::Generate).is_empty());
        assert_eq!(app.phase(), GenerationPhase::Idle);
        assert!(app.result().is_none());
    }

    #[test]
    fn generate_while_generating_is_ignored() {
        let mut app = test_app();
        start_generation(&mut app, "Notes");
        assert!(app.update(&Msg::Generate).is_empty());
        assert_eq!(app.phase(), GenerationPhase::Generating);
    }

    #[test]
    fn edit_prompt_syncs_input_buffer() {
        let mut app = test_app();
        app.update(&Msg::EditPrompt("Chat app".into()));
        assert_eq!(app.controller.prompt(), "Chat app");
        assert_eq!(app.prompt_input.input(), "Chat app");
        assert_eq!(app.prompt_input.cursor(), "Chat app".len());
    }

    #[test]
    fn deploy_without_result_only_shows_banner() {
        let mut app = test_app();
        let effects = app.update(&Msg::Deploy);

        assert_eq!(effects.len(), 1);
        assert!(matches!(
            effects[0],
            Effect::ScheduleNotificationHide(ticket) if ticket.duration == Duration::from_millis(3000)
        ));
        assert!(app.notification.is_visible());
        assert_eq!(app.phase(), GenerationPhase::Idle);
    }

    #[test]
    fn deploy_with_result_requests_deployment() {
        let mut app = test_app();
        let ticket = start_generation(&mut app, "Weather dashboard");
        finish(&mut app, &ticket);

        let effects = app.update(&Msg::Deploy);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[1], Effect::DeployRequested(synthesize("Weather dashboard")));
        assert_eq!(app.phase(), GenerationPhase::Generated, "deploy never touches generation state");
    }

    #[test]
    fn superseded_hide_keeps_banner_visible() {
        let mut app = test_app();
        let first = match app.update(&Msg::Deploy)[0] {
            Effect::ScheduleNotificationHide(ticket) => ticket,
            ref other => panic!("unexpected effect {other:?}"),
        };
        let second = match app.update(&Msg::Deploy)[0] {
            Effect::ScheduleNotificationHide(ticket) => ticket,
            ref other => panic!("unexpected effect {other:?}"),
        };

        app.update(&Msg::NotificationElapsed(first.token));
        assert!(app.notification.is_visible());
        app.update(&Msg::NotificationElapsed(second.token));
        assert!(!app.notification.is_visible());
    }

    #[test]
    fn dismiss_hides_banner_and_invalidates_timer() {
        let mut app = test_app();
        let ticket = match app.update(&Msg::Deploy)[0] {
            Effect::ScheduleNotificationHide(ticket) => ticket,
            ref other => panic!("unexpected effect {other:?}"),
        };
        app.update(&Msg::DismissNotification);
        assert!(!app.notification.is_visible());

        app.update(&Msg::Deploy);
        app.update(&Msg::NotificationElapsed(ticket.token));
        assert!(app.notification.is_visible(), "stale timer must not hide the new banner");
    }

    #[test]
    fn copy_code_requires_a_result() {
        let mut app = test_app();
        assert!(app.update(&Msg::CopyCode).is_empty());

        let ticket = start_generation(&mut app, "Recipe finder");
        finish(&mut app, &ticket);
        assert_eq!(
            app.update(&Msg::CopyCode),
            vec![Effect::CopyToClipboardRequested(synthesize("Recipe finder").code)]
        );
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut app = test_app();
        let ticket = start_generation(&mut app, "Habit tracker");
        let stale = GenerationOutcome {
            token: ticket.token + 7,
            app: synthesize("something else"),
        };
        app.update(&Msg::GenerationCompleted(stale));
        assert_eq!(app.phase(), GenerationPhase::Generating);
    }

    #[test]
    fn tick_only_animates_while_generating() {
        let mut app = test_app();
        app.update(&Msg::Tick);
        assert_eq!(app.throbber_idx, 0);

        start_generation(&mut app, "Kanban board");
        for _ in 0..THROBBER_FRAME_COUNT + 2 {
            app.update(&Msg::Tick);
        }
        assert_eq!(app.throbber_idx, 2);
    }

    #[test]
    fn deploy_results_are_logged() {
        let mut app = test_app();
        app.update(&Msg::DeployFinished(Ok(DeployReceipt {
            target: "Vercel".into(),
            slug: "chat-app".into(),
            simulated: true,
        })));
        assert_eq!(
            app.logs.last().map(|entry| entry.message.as_str()),
            Some("Deployed chat-app to Vercel (simulated)")
        );

        app.update(&Msg::DeployFinished(Err("quota exceeded".into())));
        assert_eq!(
            app.logs.last().map(|entry| entry.message.as_str()),
            Some("Deploy failed: quota exceeded")
        );
    }

    #[test]
    fn logs_are_bounded() {
        let mut logs = LogsState::default();
        for i in 0..MAX_LOG_ENTRIES + 25 {
            logs.push(format!("line {i}"));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.entries().next().map(|e| e.message.as_str()), Some("line 25"));
    }

    #[test]
    fn focus_and_scroll_follow_the_result() {
        let mut app = test_app();
        app.toggle_focus();
        assert_eq!(app.focus, MainFocus::Prompt, "no code to focus yet");

        let ticket = start_generation(&mut app, "Photo gallery");
        finish(&mut app, &ticket);
        app.toggle_focus();
        assert_eq!(app.focus, MainFocus::Code);

        app.scroll_code(-3);
        assert_eq!(app.code_scroll, 0);
        app.scroll_code(10_000);
        let last_line = synthesize("Photo gallery").code.lines().count() as u16 - 1;
        assert_eq!(app.code_scroll, last_line);
    }
}
