//! Generation workflow.
//!
//! [`state`] owns the phase/result state machine behind the generate action,
//! and [`runner`] resolves the tickets it hands out by waiting out the
//! simulated latency and invoking the synthesizer.

pub mod runner;
pub mod state;

pub use runner::resolve_generation;
pub use state::{DEFAULT_GENERATION_LATENCY, WorkflowController};
