//! Component system for the AppForge TUI.
//!
//! Components are self-contained UI elements that handle their own input and
//! render into a provided `Rect`. They never reach outside [`App`]: state
//! changes go through [`App::update`], and any resulting side effects are
//! reported back to the runtime as [`Effect`]s.

use appforge_types::Effect;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Rendering takes `&mut App` so components can adjust view-only state
/// (for example, clamping a scroll offset to the visible height).
pub(crate) trait Component {
    /// Handle a key event while this component is focused.
    ///
    /// Returns the effects produced by any messages the component sent.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into `rect`.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
