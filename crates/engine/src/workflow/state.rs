//! Generation lifecycle state management.
//!
//! The controller owns the prompt and the phase/result pair. Phase and result
//! live in a single enum so observers can never see `Generated` without a
//! result or `Generating` with a leftover one.

use std::time::Duration;

use appforge_types::{GeneratedApp, GenerationOutcome, GenerationPhase, GenerationTicket};
use tracing::{debug, info};

use super::runner::resolve_generation;

/// Simulated latency of one generation.
pub const DEFAULT_GENERATION_LATENCY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum GenerationState {
    #[default]
    Idle,
    Generating {
        token: u64,
    },
    Generated(GeneratedApp),
}

/// Owns the prompt and drives `Idle -> Generating -> Generated`.
///
/// At most one generation is in flight: [`WorkflowController::generate`]
/// refuses while a ticket is outstanding, and [`WorkflowController::complete`]
/// only accepts the outcome of the latest ticket.
#[derive(Debug, Clone)]
pub struct WorkflowController {
    /// Live prompt buffer; edits never affect an in-flight ticket
    prompt: String,
    state: GenerationState,
    latency: Duration,
    /// Last token handed out by `generate`
    last_token: u64,
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_LATENCY)
    }
}

impl WorkflowController {
    /// Creates an idle controller with an empty prompt.
    pub fn new(latency: Duration) -> Self {
        Self {
            prompt: String::new(),
            state: GenerationState::Idle,
            latency,
            last_token: 0,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Replaces the stored prompt. Allowed in every phase.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn phase(&self) -> GenerationPhase {
        match self.state {
            GenerationState::Idle => GenerationPhase::Idle,
            GenerationState::Generating { .. } => GenerationPhase::Generating,
            GenerationState::Generated(_) => GenerationPhase::Generated,
        }
    }

    /// The current result, present only in the `Generated` phase.
    pub fn result(&self) -> Option<&GeneratedApp> {
        match &self.state {
            GenerationState::Generated(app) => Some(app),
            _ => None,
        }
    }

    /// Whether [`WorkflowController::generate`] would be accepted right now.
    pub fn can_generate(&self) -> bool {
        !self.prompt.trim().is_empty() && !matches!(self.state, GenerationState::Generating { .. })
    }

    /// Starts a generation from the current prompt.
    ///
    /// Returns `None` without touching any state when the trimmed prompt is
    /// empty or a generation is already in flight. Otherwise the previous
    /// result is discarded, the phase becomes `Generating`, and the returned
    /// ticket carries the captured prompt for [`resolve_generation`].
    pub fn generate(&mut self) -> Option<GenerationTicket> {
        if !self.can_generate() {
            debug!(phase = %self.phase(), "generate rejected");
            return None;
        }

        self.last_token += 1;
        let token = self.last_token;
        self.state = GenerationState::Generating { token };
        info!(token, latency_ms = self.latency.as_millis() as u64, "generation started");

        Some(GenerationTicket {
            token,
            prompt: self.prompt.clone(),
            latency: self.latency,
        })
    }

    /// Stores the outcome of the in-flight generation.
    ///
    /// Returns `false` and leaves the state untouched if the outcome does not
    /// belong to the current ticket.
    pub fn complete(&mut self, outcome: GenerationOutcome) -> bool {
        match self.state {
            GenerationState::Generating { token } if token == outcome.token => {
                info!(token, title = %outcome.app.title, "generation completed");
                self.state = GenerationState::Generated(outcome.app);
                true
            }
            _ => {
                debug!(token = outcome.token, phase = %self.phase(), "ignoring stale generation outcome");
                false
            }
        }
    }

    /// Runs a full generation cycle inline and returns the new result.
    pub async fn generate_and_wait(&mut self) -> Option<&GeneratedApp> {
        let ticket = self.generate()?;
        let outcome = resolve_generation(ticket).await;
        self.complete(outcome);
        self.result()
    }
}
