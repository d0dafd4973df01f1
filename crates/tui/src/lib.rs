//! # AppForge TUI
//!
//! Terminal front end for AppForge: type a prompt, watch the simulated
//! generation run, browse the generated code, copy it, and "deploy" it.
//!
//! ## Architecture
//!
//! - [`app`] holds all screen state and a pure `update(&Msg) -> Vec<Effect>`
//! - [`cmd`] turns effects into clipboard writes and spawned Tokio tasks
//! - `ui` contains the runtime loop, components, and theme
//!
//! The runtime feeds every finished task back into `update` as a message, so
//! all state changes happen on the loop that owns `App`.

pub mod app;
pub mod cmd;
mod ui;

use anyhow::Result;
use appforge_util::ForgeConfig;

/// Runs the interactive TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode or the alternate screen, or when drawing fails.
pub async fn run(config: ForgeConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
