//! # AppForge Engine
//!
//! The engine holds the decision logic behind the AppForge screen. Everything
//! here is independent of the terminal and can be driven from tests, the
//! headless CLI, or the TUI runtime.
//!
//! ## Usage
//!
//! ```rust
//! use appforge_engine::{WorkflowController, synthesize};
//! use appforge_types::GenerationPhase;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut controller = WorkflowController::new(Duration::from_millis(1));
//! controller.set_prompt("A todo list app");
//! let app = controller.generate_and_wait().await.cloned();
//! assert_eq!(controller.phase(), GenerationPhase::Generated);
//! assert_eq!(app, Some(synthesize("A todo list app")));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`synthesizer`**: pure prompt -> app derivation
//! - **`workflow`**: the generation state machine and the latency runner
//! - **`notification`**: the self-superseding deploy banner timer
//! - **`deploy`**: the deployment collaborator trait and its simulated client

pub mod deploy;
pub mod notification;
pub mod synthesizer;
pub mod workflow;

pub use deploy::{DeploymentClient, DeploymentError, SimulatedDeploymentClient};
pub use notification::{DEFAULT_NOTIFICATION_DURATION, NotificationTimer, wait_for_expiry};
pub use synthesizer::synthesize;
pub use workflow::{DEFAULT_GENERATION_LATENCY, WorkflowController, resolve_generation};
