//! Transient deploy notification with auto-dismiss.
//!
//! Each [`NotificationTimer::trigger`] issues a fresh token. A scheduled hide
//! only takes effect when its token is still the latest, so re-triggering
//! supersedes any earlier hide without having to cancel it.

use std::time::Duration;

use appforge_types::NotificationTicket;
use tracing::{debug, info};

/// How long the banner stays up after the latest trigger.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct NotificationTimer {
    visible: bool,
    /// Latest token issued; hides carrying any other token are ignored
    current_token: u64,
    duration: Duration,
    message: String,
}

impl NotificationTimer {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            visible: false,
            current_token: 0,
            duration,
            message: message.into(),
        }
    }

    /// Banner used for the deploy action, e.g. `🚀 Deploying to Vercel...`.
    pub fn deploying_to(target: &str, duration: Duration) -> Self {
        Self::new(format!("🚀 Deploying to {target}..."), duration)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shows the banner and schedules a hide `duration` from now.
    ///
    /// Any previously scheduled hide is superseded.
    pub fn trigger(&mut self) -> NotificationTicket {
        self.current_token += 1;
        self.visible = true;
        info!(token = self.current_token, "notification shown");
        NotificationTicket {
            token: self.current_token,
            duration: self.duration,
        }
    }

    /// Applies a timer-fired hide.
    ///
    /// Returns `true` only when this call performed a `Visible -> Hidden`
    /// transition.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.current_token {
            debug!(token, current = self.current_token, "superseded notification hide ignored");
            return false;
        }
        if !self.visible {
            return false;
        }
        self.visible = false;
        debug!(token, "notification hidden by timer");
        true
    }

    /// Hides the banner now and invalidates every pending hide.
    pub fn hide(&mut self) {
        self.current_token += 1;
        self.visible = false;
    }
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::deploying_to("Vercel", DEFAULT_NOTIFICATION_DURATION)
    }
}

/// Sleeps for the ticket's duration and yields its token.
///
/// The deadline is fixed when this function is called, not when the returned
/// future is first polled.
pub fn wait_for_expiry(ticket: NotificationTicket) -> impl Future<Output = u64> + Send + 'static {
    let sleep = tokio::time::sleep(ticket.duration);
    async move {
        sleep.await;
        ticket.token
    }
}
