use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a single generation attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// Waiting for the user to request a generation
    #[default]
    Idle,
    /// A simulated generation is in flight
    Generating,
    /// A result is available for presentation
    Generated,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Generated => "generated",
        };
        f.write_str(label)
    }
}

/// The synthesized application produced from a prompt.
///
/// Values are immutable once created; a new generation replaces the whole
/// value rather than editing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedApp {
    /// Short heading derived from the first words of the prompt
    pub title: String,
    /// One-sentence summary mentioning the prompt
    pub description: String,
    /// Source listing for the generated component
    pub code: String,
}

/// Captured input for one in-flight generation.
///
/// The prompt is copied when the generation starts so later edits to the
/// live prompt cannot leak into the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    /// Monotonic identifier issued by the controller
    pub token: u64,
    /// Prompt value at the moment generation was requested
    pub prompt: String,
    /// Simulated latency before synthesis runs
    pub latency: Duration,
}

/// Result of resolving a [`GenerationTicket`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Token of the ticket that produced this outcome
    pub token: u64,
    /// The synthesized application
    pub app: GeneratedApp,
}

/// A scheduled hide for the deploy notification banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTicket {
    /// Token that must still be current when the hide fires
    pub token: u64,
    /// Delay between the trigger and the hide
    pub duration: Duration,
}

/// Receipt returned by a deployment client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    /// Platform the app was (or would have been) deployed to
    pub target: String,
    /// Identifier derived from the app title
    pub slug: String,
    /// Whether the deployment actually left this process
    pub simulated: bool,
}

/// Result of asynchronous work spawned by the command layer.
#[derive(Debug, Clone)]
pub enum ExecOutcome {
    /// The simulated generation latency elapsed and synthesis ran
    Generated(GenerationOutcome),
    /// A notification hide timer fired
    NotificationElapsed(u64),
    /// The deployment client returned
    Deployed(Result<DeployReceipt, String>),
    /// Free-form log line
    Log(String),
}

/// Messages that can be sent to update the application state.
///
/// This enum defines all the possible user actions and system events
/// that can trigger state changes in the application.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Replace the stored prompt
    EditPrompt(String),
    /// Request a new generation from the current prompt
    Generate,
    /// A spawned generation finished
    GenerationCompleted(GenerationOutcome),
    /// Request a deploy of the current result
    Deploy,
    /// The deployment client returned
    DeployFinished(Result<DeployReceipt, String>),
    /// Copy the generated code to the clipboard
    CopyCode,
    /// A notification hide timer fired with the given token
    NotificationElapsed(u64),
    /// Hide the notification banner immediately
    DismissNotification,
    /// Periodic UI tick (e.g., throbbers)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Append a line to the activity log
    Log(String),
}

impl From<ExecOutcome> for Msg {
    fn from(outcome: ExecOutcome) -> Self {
        match outcome {
            ExecOutcome::Generated(outcome) => Msg::GenerationCompleted(outcome),
            ExecOutcome::NotificationElapsed(token) => Msg::NotificationElapsed(token),
            ExecOutcome::Deployed(result) => Msg::DeployFinished(result),
            ExecOutcome::Log(line) => Msg::Log(line),
        }
    }
}

/// Side effects that can be triggered by state changes.
///
/// This enum defines actions that should be performed as a result
/// of state changes, such as copying to clipboard or starting timers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Effect {
    /// Run the simulated generation latency for the ticket
    StartGeneration(GenerationTicket),
    /// Schedule the notification hide described by the ticket
    ScheduleNotificationHide(NotificationTicket),
    /// Hand the app to the deployment client
    DeployRequested(GeneratedApp),
    /// Write the given text to the system clipboard
    CopyToClipboardRequested(String),
}
