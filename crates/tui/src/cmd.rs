//! # Command Execution Layer
//!
//! This module translates application effects ([`Effect`]) into imperative
//! commands ([`Cmd`]) and executes them. It is the boundary where the pure
//! state in [`App`](crate::app::App) meets side effects:
//! - Writing to the system clipboard
//! - Sleeping out the simulated generation latency
//! - Scheduling the deploy banner hide
//! - Calling the deployment client
//!
//! Clipboard writes finish synchronously and come back as immediate
//! outcomes. Everything else is spawned onto the Tokio runtime and reported
//! through a [`JoinHandle`] that the runtime polls.

use std::sync::Arc;

use appforge_engine::{DeploymentClient, resolve_generation, wait_for_expiry};
use appforge_types::{Effect, ExecOutcome, GeneratedApp, GenerationTicket, NotificationTicket};
use tokio::task::{JoinHandle, spawn};
use tracing::warn;

use crate::app::App;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
    /// Wait out the ticket's latency, then synthesize.
    Generate(GenerationTicket),
    /// Fire a notification hide once the ticket's duration elapses.
    ScheduleHide(NotificationTicket),
    /// Hand the app to the deployment client.
    Deploy(GeneratedApp),
}

/// Results of running a batch of commands.
#[derive(Debug, Default)]
pub struct CommandBatch {
    /// Outcomes that completed synchronously
    pub immediate: Vec<ExecOutcome>,
    /// Spawned work to be polled by the runtime
    pub pending: Vec<JoinHandle<ExecOutcome>>,
}

/// Convert application [`Effect`]s into [`Cmd`]s.
///
/// Effects say what should happen; commands say how.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::StartGeneration(ticket) => Cmd::Generate(ticket),
            Effect::ScheduleNotificationHide(ticket) => Cmd::ScheduleHide(ticket),
            Effect::DeployRequested(app) => Cmd::Deploy(app),
            Effect::CopyToClipboardRequested(text) => Cmd::ClipboardSet(text),
        })
        .collect()
}

/// Execute a sequence of commands.
///
/// Must be called from within a Tokio runtime.
pub fn run_cmds(app: &App, commands: Vec<Cmd>) -> CommandBatch {
    let mut batch = CommandBatch::default();
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => batch.immediate.push(execute_clipboard_set(text)),
            Cmd::Generate(ticket) => batch.pending.push(spawn_generation(ticket)),
            Cmd::ScheduleHide(ticket) => batch.pending.push(spawn_notification_hide(ticket)),
            Cmd::Deploy(generated) => batch.pending.push(spawn_deploy(Arc::clone(&app.ctx.deployer), generated)),
        }
    }
    batch
}

/// Convenience wrapper: [`from_effects`] followed by [`run_cmds`].
pub fn run_from_effects(app: &App, effects: Vec<Effect>) -> CommandBatch {
    run_cmds(app, from_effects(effects))
}

/// Write `text` to the system clipboard and describe the result.
fn execute_clipboard_set(text: String) -> ExecOutcome {
    let line_count = text.lines().count();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => ExecOutcome::Log(format!("📋 Copied {line_count} lines of code to the clipboard")),
        Err(error) => {
            warn!(error = %error, "clipboard write failed");
            ExecOutcome::Log(format!("Clipboard error: {error}"))
        }
    }
}

fn spawn_generation(ticket: GenerationTicket) -> JoinHandle<ExecOutcome> {
    let resolution = resolve_generation(ticket);
    spawn(async move { ExecOutcome::Generated(resolution.await) })
}

fn spawn_notification_hide(ticket: NotificationTicket) -> JoinHandle<ExecOutcome> {
    let expiry = wait_for_expiry(ticket);
    spawn(async move { ExecOutcome::NotificationElapsed(expiry.await) })
}

fn spawn_deploy(deployer: Arc<dyn DeploymentClient>, generated: GeneratedApp) -> JoinHandle<ExecOutcome> {
    spawn(async move {
        let result = deployer.deploy(&generated).await.map_err(|error| {
            warn!(platform = %deployer.target(), error = %error, "deployment failed");
            error.to_string()
        });
        ExecOutcome::Deployed(result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_engine::synthesize;
    use appforge_types::Msg;
    use appforge_util::ForgeConfig;
    use std::time::Duration;
    use tokio::time::Instant;

    #[test]
    fn effects_map_one_to_one_onto_commands() {
        let ticket = NotificationTicket {
            token: 2,
            duration: Duration::from_millis(3000),
        };
        let commands = from_effects(vec![
            Effect::ScheduleNotificationHide(ticket),
            Effect::CopyToClipboardRequested("code".into()),
        ]);
        assert_eq!(
            commands,
            vec![Cmd::ScheduleHide(ticket), Cmd::ClipboardSet("code".into())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn generation_outcome_arrives_after_latency() {
        let mut app = App::new(ForgeConfig::default());
        app.update(&Msg::EditPrompt("A todo list app".into()));
        let effects = app.update(&Msg::Generate);

        let started = Instant::now();
        let batch = run_from_effects(&app, effects);
        assert!(batch.immediate.is_empty());
        assert_eq!(batch.pending.len(), 1);

        let outcome = batch.pending.into_iter().next().unwrap().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2500));
        app.update(&Msg::from(outcome));
        assert_eq!(app.result(), Some(&synthesize("A todo list app")));
    }

    #[tokio::test(start_paused = true)]
    async fn deploy_spawns_hide_and_deployment() {
        let mut app = App::new(ForgeConfig::default());
        app.update(&Msg::EditPrompt("Chat app".into()));
        let effects = app.update(&Msg::Generate);
        for handle in run_from_effects(&app, effects).pending {
            let outcome = handle.await.unwrap();
            app.update(&Msg::from(outcome));
        }

        let effects = app.update(&Msg::Deploy);
        let batch = run_from_effects(&app, effects);
        assert_eq!(batch.pending.len(), 2);

        for handle in batch.pending {
            match handle.await.unwrap() {
                ExecOutcome::Deployed(Ok(receipt)) => assert_eq!(receipt.slug, "chat-app"),
                ExecOutcome::NotificationElapsed(token) => {
                    assert!(app.update(&Msg::NotificationElapsed(token)).is_empty());
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert!(!app.notification.is_visible());
    }
}
