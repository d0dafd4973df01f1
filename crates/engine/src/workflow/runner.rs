//! Resolves generation tickets.
//!
//! The only suspension point of a generation is the simulated latency. The
//! runner sleeps for the ticket's latency and then synthesizes from the prompt
//! captured in the ticket, never from the controller's live prompt.

use appforge_types::{GenerationOutcome, GenerationTicket};
use tracing::debug;

use crate::synthesize;

/// Waits out the ticket's latency and synthesizes the app.
///
/// The latency starts counting when this function is called.
pub fn resolve_generation(ticket: GenerationTicket) -> impl Future<Output = GenerationOutcome> + Send + 'static {
    let latency = tokio::time::sleep(ticket.latency);
    async move {
        latency.await;
        debug!(token = ticket.token, "generation latency elapsed");
        GenerationOutcome {
            token: ticket.token,
            app: synthesize(&ticket.prompt),
        }
    }
}
